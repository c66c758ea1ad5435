//! Error types for loading quiz data and running the terminal UI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single JSON resource could not be turned into usable data.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The file could not be read.
    #[error("read failed: {0}")]
    Read(#[from] io::Error),

    /// The file is not valid JSON for the expected shape.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but lists nothing to quiz on.
    #[error("no entries")]
    Empty,
}

/// Errors surfaced by the data loader.
///
/// The two variants keep manifest failures distinguishable from subject-file
/// failures; both are terminal for the operation that triggered them.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The subject manifest could not be loaded.
    #[error("failed to load subject manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ResourceError,
    },

    /// A subject's question file could not be loaded.
    #[error("failed to load subject '{name}' from {}: {source}", path.display())]
    Subject {
        name: String,
        path: PathBuf,
        #[source]
        source: ResourceError,
    },
}

/// Top-level error for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Quiz data could not be loaded.
    #[error("failed to load quiz data: {0}")]
    Load(#[from] LoadError),

    /// Terminal IO failed while the quiz was running.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
