//! Immutable in-memory representation of the DOCX shell package.
//!
//! The shell is a minimal, styles-only .docx loaded once at startup. It is
//! the canonical baseline for every generated document: each request deep
//! clones it, mutates only `word/document.xml` in the clone, and
//! re-serializes. The canonical package itself is never written after load.

pub mod error;
pub mod package;

pub use error::ShellError;
pub use package::{DOCUMENT_PATH, ShellPackage};
