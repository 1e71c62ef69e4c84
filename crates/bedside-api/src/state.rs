use std::sync::Arc;

use bedside_scores::Catalog;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}
