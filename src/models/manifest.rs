use serde::Deserialize;

/// Top-level document of `subjects.json`.
#[derive(Clone, Deserialize)]
pub struct Manifest {
    pub subjects: Vec<SubjectEntry>,
}

/// One selectable subject as listed in the manifest.
///
/// `file` names the subject's question document, relative to the data
/// directory. `total_questions` is display-only and is not checked against
/// the actual question count.
#[derive(Clone, Debug, Deserialize)]
pub struct SubjectEntry {
    pub id: String,
    pub name: String,
    pub file: String,
    pub icon: String,
    pub color: String,
    pub total_questions: usize,
    #[serde(default)]
    pub description: Option<String>,
}
