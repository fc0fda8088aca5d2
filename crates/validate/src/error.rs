use std::path::PathBuf;
use thiserror::Error;

/// Startup-time failures while loading or compiling the rule schema.
/// These are fatal to process startup, never per-request outcomes.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("failed to read rule schema {path}: {source}")]
    SchemaRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("rule schema is not valid JSON: {0}")]
    SchemaParse(#[from] serde_json::Error),

    #[error("rule schema failed to compile: {0}")]
    SchemaCompile(String),
}
