use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Emits one `api_request` event per request.
///
/// The route is logged as its matched template (`/scores/{id}/compute`)
/// with the score id as a separate field. Request bodies are never logged.
/// Server errors are raised to `warn`.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let score_id = req
        .uri()
        .path()
        .strip_prefix("/scores/")
        .and_then(|rest| rest.split('/').next())
        .map(str::to_owned);
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(%method, %route, ?score_id, status = status.as_u16(), elapsed_ms, "api_request");
    } else {
        tracing::info!(%method, %route, ?score_id, status = status.as_u16(), elapsed_ms, "api_request");
    }

    response
}
