use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("failed to read component directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read component file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("duplicate component name '{name}': {first} and {second}")]
    DuplicateComponent {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("component not found: {0}")]
    NotFound(String),
}
