use crate::error::ValidateError;
use crate::result::{PlanError, ValidationResult};
use serde_json::Value;
use std::path::Path;

/// Validates document plans against the rule schema.
///
/// Built once at startup from the schema asset and shared read-only across
/// requests. `validate` never mutates its input and never fails: every
/// outcome, including internal faults, is reported as a [`ValidationResult`].
#[derive(Debug)]
pub struct PlanValidator {
    schema: jsonschema::Validator,
}

impl PlanValidator {
    /// Loads and compiles the rule schema from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ValidateError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ValidateError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Value = serde_json::from_str(&text)?;
        let validator = Self::from_schema(&schema)?;
        log::info!("compiled rule schema from {}", path.display());
        Ok(validator)
    }

    /// Compiles an already-parsed rule schema.
    pub fn from_schema(schema: &Value) -> Result<Self, ValidateError> {
        let schema = jsonschema::validator_for(schema)
            .map_err(|e| ValidateError::SchemaCompile(e.to_string()))?;
        Ok(Self { schema })
    }

    /// Checks `plan` against the rule set, accumulating every violation
    /// rather than stopping at the first.
    pub fn validate(&self, plan: &Value) -> ValidationResult {
        let errors: Vec<PlanError> = self
            .schema
            .iter_errors(plan)
            .map(|err| PlanError {
                path: pointer_to_plan_path(&err.instance_path().to_string()),
                message: err.to_string(),
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::ok()
        } else {
            log::debug!("plan rejected with {} rule violations", errors.len());
            ValidationResult::failed(errors)
        }
    }
}

/// Converts a JSON Pointer (`/body/2/props/x`) into plan locator syntax
/// (`body[2].props.x`). The empty pointer maps to `root`.
fn pointer_to_plan_path(pointer: &str) -> String {
    if pointer.is_empty() {
        return "root".to_string();
    }

    let mut path = String::new();
    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            path.push_str(&format!("[{segment}]"));
        } else {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(&segment);
        }
    }
    path
}
