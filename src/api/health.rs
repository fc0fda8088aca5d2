use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

/// GET /health: liveness plus a summary of the loaded component library.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let components = state.engine.component_names();
    let count = components.len();
    Json(json!({
        "status": "healthy",
        "service": "quire",
        "components_loaded": count,
        "available_components": components,
    }))
}

/// GET /components: names of the loaded components.
pub async fn components(State(state): State<AppState>) -> Json<Value> {
    let components = state.engine.component_names();
    let count = components.len();
    Json(json!({
        "components": components,
        "count": count,
    }))
}
