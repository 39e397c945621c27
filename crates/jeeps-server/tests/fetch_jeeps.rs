//! HTTP tests for the /jeeps endpoint.
//!
//! Drives the full router with `tower::ServiceExt::oneshot` against a seeded
//! in-memory store, asserting status codes, the response bodies, and the
//! error envelope shape.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use jeeps::inventory::{Jeep, JeepModel, TRIM_MAX_LENGTH};
use jeeps::testing::{seeded_store, FailingStore};
use jeeps_server::{api::build_router, state::AppState};
use rust_decimal::Decimal;
use tower::ServiceExt;

async fn seeded_app() -> Router {
    build_router(AppState::with_store(seeded_store().await))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

fn assert_envelope(json: &serde_json::Value, status: StatusCode, reason: &str) {
    assert!(json["message"].is_string());
    assert_eq!(json["status code"], status.as_u16());
    assert_eq!(json["uri"], "/jeeps");
    assert!(json["timestamp"].is_string());
    assert_eq!(json["reason"], reason);
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, json) = get(seeded_app().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn valid_model_and_trim_returns_matching_jeeps() {
    let (status, json) = get(seeded_app().await, "/jeeps?model=WRANGLER&trim=Sport").await;
    assert_eq!(status, StatusCode::OK);

    let mut actual: Vec<Jeep> = serde_json::from_value(json).unwrap();
    for jeep in &mut actual {
        jeep.id = None;
    }

    let expected = vec![
        Jeep::new(JeepModel::Wrangler, "Sport", 2, 17, Decimal::new(2_847_500, 2)),
        Jeep::new(JeepModel::Wrangler, "Sport", 4, 17, Decimal::new(3_197_500, 2)),
    ];
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn trim_with_space_matches_multi_word_trims() {
    let (status, json) = get(seeded_app().await, "/jeeps?model=WRANGLER&trim=Sahara").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_trim_returns_404_envelope() {
    let (status, json) = get(
        seeded_app().await,
        "/jeeps?model=WRANGLER&trim=Unknown%20Value",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&json, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn non_alphanumeric_trim_returns_400() {
    let (status, json) = get(
        seeded_app().await,
        "/jeeps?model=WRANGLER&trim=%40%23%24%25%5E%26%26%25",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&json, StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn oversized_trim_returns_400() {
    let trim = "C".repeat(TRIM_MAX_LENGTH + 1);
    let uri = format!("/jeeps?model=WRANGLER&trim={}", trim);
    let (status, json) = get(seeded_app().await, &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&json, StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn unknown_model_returns_400() {
    let (status, json) = get(seeded_app().await, "/jeeps?model=INVALID&trim=Sport").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&json, StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn lowercase_model_returns_400() {
    let (status, json) = get(seeded_app().await, "/jeeps?model=wrangler&trim=Sport").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&json, StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn missing_parameters_return_400() {
    for uri in ["/jeeps", "/jeeps?model=WRANGLER", "/jeeps?trim=Sport"] {
        let (status, json) = get(seeded_app().await, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri = {}", uri);
        assert_envelope(&json, StatusCode::BAD_REQUEST, "Bad Request");
    }
}

#[tokio::test]
async fn store_fault_returns_500_without_leaking_detail() {
    let app = build_router(AppState::with_store(Arc::new(FailingStore)));
    let (status, json) = get(app, "/jeeps?model=WRANGLER&trim=Sport").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_envelope(&json, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");

    // The store's internal error text must not reach the caller.
    let message = json["message"].as_str().unwrap();
    assert!(!message.contains("storage backend unavailable"));
}

#[tokio::test]
async fn validation_runs_before_the_lookup() {
    // A failing store never gets called when the input is invalid.
    let app = build_router(AppState::with_store(Arc::new(FailingStore)));
    let (status, json) = get(app, "/jeeps?model=INVALID&trim=Sport").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&json, StatusCode::BAD_REQUEST, "Bad Request");
}
