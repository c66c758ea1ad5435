//! Loading of quiz data from static JSON resources.

mod loader;

pub use loader::{MANIFEST_FILE, load_manifest, load_subject};
