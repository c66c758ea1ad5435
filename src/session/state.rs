//! The quiz session state machine.
//!
//! A `Session` owns one subject's questions and a seeded RNG for option
//! shuffling. All mutation goes through the intent methods; an intent fired
//! in the wrong phase is ignored rather than rejected, so the caller never
//! has to pre-check state.

use rand::rngs::StdRng;

use crate::models::{AnswerOption, Question, Subject};

use super::score::{self, Tier};
use super::shuffle;

/// Where the session is in its answer/advance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The current question is on screen, awaiting a choice.
    Active,
    /// A choice has been recorded; feedback is showing.
    Answered,
    /// Every question has been answered.
    Completed,
}

/// One attempt at a subject's question set.
pub struct Session {
    subject: Subject,
    phase: Phase,
    current: usize,
    score: usize,
    options: Vec<AnswerOption>,
    chosen: Option<u32>,
    rng: StdRng,
}

impl Session {
    /// Start at question 0 with freshly shuffled options.
    ///
    /// The loader guarantees a non-empty question list.
    pub fn new(subject: Subject, mut rng: StdRng) -> Self {
        let options = shuffle::shuffled(&subject.questions[0].options, &mut rng);
        Self {
            subject,
            phase: Phase::Active,
            current: 0,
            score: 0,
            options,
            chosen: None,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn subject_name(&self) -> &str {
        self.subject.name()
    }

    pub fn current_question(&self) -> &Question {
        &self.subject.questions[self.current]
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_questions(&self) -> usize {
        self.subject.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// The current question's options in display order.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Id of the recorded choice, once one has been made.
    pub fn chosen(&self) -> Option<u32> {
        self.chosen
    }

    /// Record a choice for the current question.
    ///
    /// Only the first choice counts; later calls, or ids that are not among
    /// the current options, are ignored. The score is not touched until
    /// `advance`.
    pub fn answer(&mut self, option_id: u32) {
        if self.phase != Phase::Active {
            return;
        }
        if self.options.iter().any(|o| o.id == option_id) {
            self.chosen = Some(option_id);
            self.phase = Phase::Answered;
        }
    }

    /// Score the recorded choice and move on.
    ///
    /// On the last question the session completes; otherwise the next
    /// question comes up with freshly shuffled options.
    pub fn advance(&mut self) {
        if self.phase != Phase::Answered {
            return;
        }

        if self.chosen_is_correct() {
            self.score += 1;
        }
        self.chosen = None;

        if self.current + 1 == self.subject.questions.len() {
            self.phase = Phase::Completed;
        } else {
            self.current += 1;
            self.options =
                shuffle::shuffled(&self.subject.questions[self.current].options, &mut self.rng);
            self.phase = Phase::Active;
        }
    }

    /// Re-permute the current question's options.
    ///
    /// Refused once a choice has been made, so the feedback on screen keeps
    /// its order.
    pub fn reshuffle(&mut self) {
        if self.phase != Phase::Active {
            return;
        }
        self.options =
            shuffle::shuffled(&self.subject.questions[self.current].options, &mut self.rng);
    }

    /// Back to question 0 with a zeroed score and a fresh option order.
    pub fn restart(&mut self) {
        self.current = 0;
        self.score = 0;
        self.chosen = None;
        self.options = shuffle::shuffled(&self.subject.questions[0].options, &mut self.rng);
        self.phase = Phase::Active;
    }

    /// Rounded percent of correct answers.
    pub fn percentage(&self) -> u32 {
        score::percentage(self.score, self.total_questions())
    }

    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.percentage())
    }

    // The chosen option's own flag decides; a question with several flagged
    // options awards the point for any of them.
    fn chosen_is_correct(&self) -> bool {
        self.options
            .iter()
            .any(|o| Some(o.id) == self.chosen && o.is_correct)
    }
}
