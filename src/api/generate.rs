use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use quire_types::DocumentPlan;
use serde_json::Value;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// POST /generate: validate the plan, assemble the document, return the
/// .docx byte stream. Validation runs against the raw JSON payload so that
/// rejection errors address exactly what the caller sent.
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse> {
    let result = state.engine.validate(&payload);
    if !result.valid {
        tracing::info!("plan rejected with {} errors", result.errors.len());
        return Err(ServiceError::ValidationFailed(result));
    }

    // Post-validation the payload is known to match the plan shape.
    let plan: DocumentPlan = serde_json::from_value(payload)
        .map_err(|e| ServiceError::InvalidRequest(format!("plan shape mismatch: {e}")))?;

    let docx = state.engine.assemble(&plan)?;
    let filename = plan.doc_props.attachment_filename();
    tracing::info!("generated {} ({} bytes)", filename, docx.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        docx,
    ))
}
