//! bedside-api
//!
//! HTTP surface over the score engine. Serves the catalog and computes
//! scores for the presentation layer; holds no per-user state.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Scores (public reference data, no auth)
        .route("/scores", get(routes::scores::list_scores))
        .route("/scores/{id}", get(routes::scores::get_score))
        .route("/scores/{id}/compute", post(routes::scores::compute_score))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
