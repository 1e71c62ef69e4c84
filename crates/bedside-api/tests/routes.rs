use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use bedside_api::config::ApiConfig;
use bedside_api::error::ApiError;
use bedside_api::router;
use bedside_api::state::AppState;
use bedside_scores::{Catalog, EngineError};

fn app() -> Router {
    let catalog = Catalog::builtin().unwrap().clone();
    router(
        AppState {
            catalog: Arc::new(catalog),
        },
        CorsLayer::permissive(),
    )
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_check_is_ok() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn list_scores_reports_modality() {
    let (status, body) = send(get("/scores")).await;
    assert_eq!(status, StatusCode::OK);

    let scores = body.as_array().unwrap();
    let centor = scores.iter().find(|s| s["id"] == "centor").unwrap();
    assert_eq!(centor["modality"], "criteria");
    assert_eq!(centor["name"], "Centor Score");
}

#[tokio::test]
async fn get_score_returns_full_definition() {
    let (status, body) = send(get("/scores/gcs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"]["modality"], "categorical");
    assert_eq!(body["method"]["payload"]["groups"][2]["id"], "motor");
    assert_eq!(body["bands"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_score_is_not_found() {
    let (status, body) = send(get("/scores/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "score not found: nope");

    let (status, _) = send(post_json("/scores/nope/compute", r#"{"inputs": {}}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn compute_returns_value_and_band() {
    let (status, body) = send(post_json(
        "/scores/ldl_friedewald/compute",
        r#"{"inputs": {"total_cholesterol": 200, "hdl": 50, "triglycerides": 150}}"#,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["status"], "value");
    assert_eq!(body["outcome"]["value"], 120.0);
    assert_eq!(body["unit"], "mg/dL");
    assert_eq!(body["band"]["min"], 100.0);
    assert_eq!(body["band"]["max"], 129.0);
}

#[tokio::test]
async fn compute_reports_domain_violation_without_band() {
    let (status, body) = send(post_json(
        "/scores/ldl_friedewald/compute",
        r#"{"inputs": {"total_cholesterol": 200, "hdl": 50, "triglycerides": 450}}"#,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["status"], "invalid");
    assert!(body["outcome"]["reason"].as_str().unwrap().contains("400"));
    assert!(body["band"].is_null());
}

#[tokio::test]
async fn compute_accepts_boolean_inputs() {
    let (status, body) = send(post_json(
        "/scores/aspects/compute",
        r#"{"inputs": {"caudate": true, "m4": true, "m5": false}}"#,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["value"], 8.0);
    assert_eq!(body["band"]["label"], "Favourable");
}

#[tokio::test]
async fn missing_inputs_default_to_empty() {
    let (status, body) = send(post_json("/scores/centor/compute", "{}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["value"], 0.0);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) = send(post_json(
        "/scores/centor/compute",
        r#"{"inputs": {"fever": "yes"}}"#,
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[test]
fn default_config_serves_builtin_catalog() {
    let config = ApiConfig::default();
    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.len(), Catalog::builtin().unwrap().len());
    assert!(config.cors_layer().is_ok());
}

#[test]
fn missing_catalog_resource_fails_to_load() {
    let config = ApiConfig {
        catalog_path: Some("/nonexistent/catalog.json".into()),
        cors_origin: None,
    };
    let err = config.load_catalog().unwrap_err();
    assert!(err.to_string().contains("/nonexistent/catalog.json"));
}

#[test]
fn invalid_cors_origin_is_rejected() {
    let config = ApiConfig {
        catalog_path: None,
        cors_origin: Some("bad\norigin".to_string()),
    };
    assert!(config.cors_layer().is_err());
}

#[tokio::test]
async fn internal_errors_hide_their_detail() {
    let err = ApiError::from(EngineError::FormulaNotRegistered("bmi".to_string()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = err.into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "internal server error" }));
}

#[tokio::test]
async fn unmatched_route_still_answers() {
    let response = app().oneshot(get("/nowhere")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
