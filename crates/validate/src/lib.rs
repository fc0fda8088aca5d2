//! Document plan validation.
//!
//! Plans are checked against a declarative rule schema (JSON Schema,
//! draft 2020-12) loaded once at startup. The constraint engine itself is
//! the `jsonschema` crate; this crate owns loading the rule set, running it,
//! and translating raw schema errors into structured `{path, message}`
//! validation errors whose paths use plan locator syntax
//! (`body[2].props.test_result`).
//!
//! Validation failure is an expected outcome, returned as data. It is never
//! surfaced as an error value from [`PlanValidator::validate`].

pub mod error;
pub mod result;
pub mod validator;

pub use error::ValidateError;
pub use result::{PlanError, ValidationResult};
pub use validator::PlanValidator;
