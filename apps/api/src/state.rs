use std::sync::Arc;

use crate::recommend::RecommendEngine;

/// Shared application state injected into all route handlers via Axum extractors.
/// The engine is immutable after startup, so cloning the state is just an
/// `Arc` bump and concurrent handlers read it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendEngine>,
}
