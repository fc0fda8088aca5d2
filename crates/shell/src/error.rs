use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("failed to open shell package {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("shell package {path} is not a readable archive: {source}")]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("failed to read entry '{entry}' from shell package: {source}")]
    EntryRead {
        entry: String,
        source: std::io::Error,
    },

    #[error("failed to serialize package entry '{entry}': {source}")]
    EntryWrite {
        entry: String,
        source: std::io::Error,
    },

    #[error("failed to serialize package: {0}")]
    Serialize(zip::result::ZipError),
}
