//! Component library loading and placeholder rendering.
//!
//! A component is a named OpenXML fragment stored as `<Name>.component.xml`.
//! The library is loaded once at startup and shared read-only across all
//! requests; rendering substitutes `{{ prop }}` placeholders with
//! XML-escaped prop values.

pub mod error;
pub mod library;
pub mod render;

pub use error::ComponentError;
pub use library::ComponentLibrary;
pub use render::render;
