use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Subject {
    subject: SubjectHeader,
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Deserialize)]
struct SubjectHeader {
    name: String,
}

impl Subject {
    pub fn name(&self) -> &str {
        &self.subject.name
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    /// Subject the question was drawn from, for mixed question banks.
    #[serde(default)]
    pub source_subject: Option<String>,
    #[serde(default)]
    pub source_color: Option<String>,
    pub options: Vec<AnswerOption>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AnswerOption {
    pub id: u32,
    pub text: String,
    pub is_correct: bool,
}
