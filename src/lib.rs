//! # quizdeck
//!
//! A terminal quiz runner over subject banks of multiple-choice questions.
//! A manifest lists the available subjects; picking one starts a session
//! that walks its questions with randomly ordered options, immediate
//! feedback, and a scored summary at the end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizdeck::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Point at a directory holding subjects.json and the question files
//!     let quiz = Quiz::from_dir("data", None)?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod error;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Screen};
pub use data::{MANIFEST_FILE, load_manifest, load_subject};
pub use error::{LoadError, QuizError, ResourceError};
pub use models::{AnswerOption, Manifest, Question, Subject, SubjectEntry};
pub use session::{Phase, Session, Tier, percentage, shuffled};

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Load a quiz from a data directory containing `subjects.json`.
    ///
    /// `seed` fixes the option-shuffling RNG for reproducible runs; pass
    /// `None` to draw from OS entropy.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quizdeck::Quiz;
    ///
    /// let quiz = Quiz::from_dir("data", Some(42)).expect("Failed to load quiz data");
    /// ```
    pub fn from_dir<P: AsRef<Path>>(data_dir: P, seed: Option<u64>) -> Result<Self, QuizError> {
        let app = App::new(data_dir.as_ref().to_path_buf(), seed)?;
        Ok(Self { app })
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::Tui, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Subjects => handle_subjects_input(app, key),
        Screen::Session => match app.session().map(|s| s.phase()) {
            Some(Phase::Active) => handle_question_input(app, key),
            Some(Phase::Answered) => handle_feedback_input(app, key),
            Some(Phase::Completed) => handle_result_input(app, key),
            None => handle_subjects_input(app, key),
        },
    }
}

fn handle_subjects_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_subject();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_subject();
            false
        }
        KeyCode::Enter => {
            app.open_selected_subject();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.answer_highlighted();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.reshuffle();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Esc => {
            app.return_to_subjects();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_feedback_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.advance();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Esc => {
            app.return_to_subjects();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Esc | KeyCode::Char('b') => {
            app.return_to_subjects();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
