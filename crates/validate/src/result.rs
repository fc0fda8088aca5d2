use serde::Serialize;

/// A single rule violation, addressable into the plan that caused it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlanError {
    /// Plan locator, e.g. `body[2].props.test_result` or `root`.
    pub path: String,
    pub message: String,
}

/// Outcome of validating one plan. Constructed fresh per call.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<PlanError>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<PlanError>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }
}
