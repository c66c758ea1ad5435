use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data;
use crate::error::LoadError;
use crate::models::SubjectEntry;
use crate::session::{Phase, Session};

/// Which screen the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The subject picker.
    Subjects,
    /// A running (or completed) session.
    Session,
}

/// Application shell around the session core.
///
/// Holds the manifest, the picker cursor, the option highlight, and at most
/// one exclusively-owned `Session`. Each user intent is a method; the event
/// loop in `lib.rs` maps keys onto them.
pub struct App {
    pub screen: Screen,
    data_dir: PathBuf,
    entries: Vec<SubjectEntry>,
    cursor: usize,
    highlight: usize,
    session: Option<Session>,
    load_error: Option<LoadError>,
    rng: StdRng,
}

impl App {
    /// Load the manifest and start on the subject picker.
    ///
    /// `seed` fixes the shuffling RNG; without it every run draws from OS
    /// entropy.
    pub fn new(data_dir: PathBuf, seed: Option<u64>) -> Result<Self, LoadError> {
        let entries = data::load_manifest(&data_dir)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            screen: Screen::Subjects,
            data_dir,
            entries,
            cursor: 0,
            highlight: 0,
            session: None,
            load_error: None,
            rng,
        })
    }

    pub fn entries(&self) -> &[SubjectEntry] {
        &self.entries
    }

    /// Index of the highlighted manifest entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the highlighted option within the current question.
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The last subject load failure, shown in the picker until a load
    /// succeeds.
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    pub fn select_next_subject(&mut self) {
        self.cursor = (self.cursor + 1) % self.entries.len();
    }

    pub fn select_previous_subject(&mut self) {
        self.cursor = (self.cursor + self.entries.len() - 1) % self.entries.len();
    }

    /// Load the highlighted subject and start a session on it.
    ///
    /// On failure the picker stays up with the error shown; selecting again
    /// retries.
    pub fn open_selected_subject(&mut self) {
        let entry = &self.entries[self.cursor];
        match data::load_subject(&self.data_dir, entry) {
            Ok(subject) => {
                self.session = Some(Session::new(subject, StdRng::from_rng(&mut self.rng)));
                self.highlight = 0;
                self.load_error = None;
                self.screen = Screen::Session;
            }
            Err(err) => self.load_error = Some(err),
        }
    }

    pub fn select_next_option(&mut self) {
        if let Some(session) = &self.session
            && session.phase() == Phase::Active
        {
            self.highlight = (self.highlight + 1) % session.options().len();
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(session) = &self.session
            && session.phase() == Phase::Active
        {
            let len = session.options().len();
            self.highlight = (self.highlight + len - 1) % len;
        }
    }

    /// Commit the highlighted option as the answer.
    pub fn answer_highlighted(&mut self) {
        if let Some(session) = &mut self.session {
            let Some(id) = session.options().get(self.highlight).map(|o| o.id) else {
                return;
            };
            session.answer(id);
        }
    }

    /// Score the answer and move to the next question (or the results).
    pub fn advance(&mut self) {
        if let Some(session) = &mut self.session {
            session.advance();
            self.highlight = 0;
        }
    }

    /// Re-permute the current question's options.
    pub fn reshuffle(&mut self) {
        if let Some(session) = &mut self.session {
            session.reshuffle();
            self.highlight = 0;
        }
    }

    /// Start the current subject over.
    pub fn restart(&mut self) {
        if let Some(session) = &mut self.session {
            session.restart();
            self.highlight = 0;
        }
    }

    /// Drop the session and go back to the picker.
    pub fn return_to_subjects(&mut self) {
        self.session = None;
        self.highlight = 0;
        self.screen = Screen::Subjects;
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"{
        "subjects": [
            {
                "id": "contracts",
                "name": "Contracts",
                "file": "contracts.json",
                "icon": "C",
                "color": "blue",
                "total_questions": 1
            },
            {
                "id": "torts",
                "name": "Torts",
                "file": "missing.json",
                "icon": "T",
                "color": "red",
                "total_questions": 1
            }
        ]
    }"#;

    const SUBJECT: &str = r#"{
        "subject": { "name": "Contracts" },
        "questions": [
            {
                "id": 1,
                "text": "Q1",
                "options": [
                    { "id": 1, "text": "right", "is_correct": true },
                    { "id": 2, "text": "wrong", "is_correct": false }
                ]
            }
        ]
    }"#;

    fn app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(data::MANIFEST_FILE), MANIFEST).unwrap();
        fs::write(dir.path().join("contracts.json"), SUBJECT).unwrap();
        let app = App::new(dir.path().to_path_buf(), Some(11)).unwrap();
        (dir, app)
    }

    #[test]
    fn starts_on_the_picker() {
        let (_dir, app) = app();
        assert_eq!(app.screen, Screen::Subjects);
        assert_eq!(app.entries().len(), 2);
        assert!(app.session().is_none());
    }

    #[test]
    fn subject_cursor_wraps() {
        let (_dir, mut app) = app();
        app.select_next_subject();
        assert_eq!(app.cursor(), 1);
        app.select_next_subject();
        assert_eq!(app.cursor(), 0);
        app.select_previous_subject();
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn opening_a_subject_starts_a_session() {
        let (_dir, mut app) = app();
        app.open_selected_subject();
        assert_eq!(app.screen, Screen::Session);
        let session = app.session().unwrap();
        assert_eq!(session.subject_name(), "Contracts");
        assert_eq!(session.phase(), Phase::Active);
    }

    #[test]
    fn failed_load_stays_on_the_picker() {
        let (_dir, mut app) = app();
        app.select_next_subject();
        app.open_selected_subject();
        assert_eq!(app.screen, Screen::Subjects);
        assert!(app.session().is_none());
        assert!(app.load_error().is_some());
    }

    #[test]
    fn successful_load_clears_the_error() {
        let (_dir, mut app) = app();
        app.select_next_subject();
        app.open_selected_subject();
        assert!(app.load_error().is_some());

        app.select_previous_subject();
        app.open_selected_subject();
        assert!(app.load_error().is_none());
        assert_eq!(app.screen, Screen::Session);
    }

    #[test]
    fn option_highlight_wraps_and_resets() {
        let (_dir, mut app) = app();
        app.open_selected_subject();

        app.select_next_option();
        assert_eq!(app.highlight(), 1);
        app.select_next_option();
        assert_eq!(app.highlight(), 0);
        app.select_previous_option();
        assert_eq!(app.highlight(), 1);

        app.answer_highlighted();
        app.advance();
        assert_eq!(app.highlight(), 0);
    }

    #[test]
    fn highlight_is_frozen_while_feedback_shows() {
        let (_dir, mut app) = app();
        app.open_selected_subject();
        app.answer_highlighted();

        let before = app.highlight();
        app.select_next_option();
        assert_eq!(app.highlight(), before);
    }

    #[test]
    fn returning_to_subjects_discards_the_session() {
        let (_dir, mut app) = app();
        app.open_selected_subject();
        app.answer_highlighted();

        app.return_to_subjects();
        assert_eq!(app.screen, Screen::Subjects);
        assert!(app.session().is_none());
        assert_eq!(app.highlight(), 0);
    }
}
