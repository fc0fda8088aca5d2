use quire_core::Engine;
use std::sync::Arc;

/// Shared application state: the engine is read-only after startup, so a
/// plain `Arc` with no locking is all the concurrency story required.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

impl AppState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
