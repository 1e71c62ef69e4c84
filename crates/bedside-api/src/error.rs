use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use bedside_scores::EngineError;

/// Failure of a score route, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown score id.
    NotFound(String),
    /// Request body that is not a valid compute request.
    BadRequest(String),
    /// Catalog inconsistency discovered while serving. Details are logged,
    /// never returned.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg,
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "score route failed");
                "internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::DefinitionNotFound(id) => {
                ApiError::NotFound(format!("score not found: {id}"))
            }
            EngineError::FormulaNotRegistered(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
