use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quire_core::AssembleError;
use quire_validate::ValidationResult;
use serde_json::json;

/// Request-boundary error type. Exactly three caller-visible outcomes exist:
/// a complete document, a structured validation rejection, or a generic
/// internal error for faults the caller cannot fix.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("document plan failed validation")]
    ValidationFailed(ValidationResult),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("document assembly failed: {0}")]
    Assembly(#[from] AssembleError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationFailed(result) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "ValidationFailed",
                    "valid": false,
                    "errors": result.errors,
                })),
            )
                .into_response(),
            Self::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "InvalidRequest",
                    "message": message,
                })),
            )
                .into_response(),
            Self::Assembly(ref source) => {
                // Assembly faults are asset/deployment bugs, not caller
                // input; log the detail, return a generic signal.
                tracing::error!("assembly fault: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "InternalError",
                        "message": "Failed to generate document",
                    })),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
