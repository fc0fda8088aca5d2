//! Quire: DOCX assembly from declarative JSON plans.
//!
//! The library surface re-exports the engine crates; the binaries in this
//! package wrap them in an HTTP service (`quire-server`) and a one-shot CLI
//! renderer (`quire-render`).

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use quire_component::{ComponentError, ComponentLibrary, render};
pub use quire_core::{Assembler, AssembleError, Engine, EngineError, SpliceStrategy};
pub use quire_shell::{DOCUMENT_PATH, ShellError, ShellPackage};
pub use quire_types::{ComponentInstance, DocProps, DocumentPlan};
pub use quire_validate::{PlanError, PlanValidator, ValidateError, ValidationResult};

use axum::Router;
use axum::routing::{get, post};
use state::AppState;
use tower_http::trace::TraceLayer;

/// Builds the service router. Separated from `main` so handler tests can
/// drive the full stack without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(api::generate))
        .route("/health", get(api::health))
        .route("/components", get(api::components))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
