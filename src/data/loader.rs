use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{LoadError, ResourceError};
use crate::models::{Manifest, Subject, SubjectEntry};

/// File name of the subject manifest inside the data directory.
pub const MANIFEST_FILE: &str = "subjects.json";

/// Load the ordered subject list from `subjects.json` in `data_dir`.
pub fn load_manifest(data_dir: &Path) -> Result<Vec<SubjectEntry>, LoadError> {
    let path = data_dir.join(MANIFEST_FILE);

    match read_resource::<Manifest>(&path) {
        Ok(manifest) if manifest.subjects.is_empty() => Err(LoadError::Manifest {
            path,
            source: ResourceError::Empty,
        }),
        Ok(manifest) => Ok(manifest.subjects),
        Err(source) => Err(LoadError::Manifest { path, source }),
    }
}

/// Load the question file named by a manifest entry.
pub fn load_subject(data_dir: &Path, entry: &SubjectEntry) -> Result<Subject, LoadError> {
    let path = data_dir.join(&entry.file);

    match read_resource::<Subject>(&path) {
        Ok(subject) if subject.questions.is_empty() => Err(LoadError::Subject {
            name: entry.name.clone(),
            path,
            source: ResourceError::Empty,
        }),
        Ok(subject) => Ok(subject),
        Err(source) => Err(LoadError::Subject {
            name: entry.name.clone(),
            path,
            source,
        }),
    }
}

fn read_resource<T: DeserializeOwned>(path: &Path) -> Result<T, ResourceError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
