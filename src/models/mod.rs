mod manifest;
mod subject;

pub use manifest::{Manifest, SubjectEntry};
pub use subject::{AnswerOption, Question, Subject};
