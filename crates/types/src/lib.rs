//! Plan data model shared across the Quire crates.
//!
//! A document plan is the caller-supplied JSON payload describing which
//! components to render, in what order, with what properties. The types here
//! are deliberately dynamic around `props`: only the validator interrogates
//! prop values by type, everything else treats them as opaque JSON.

pub mod plan;

pub use plan::{CHILDREN_KEY, ComponentInstance, DocProps, DocumentPlan, PropMap};
