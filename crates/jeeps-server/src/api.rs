use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use jeeps::inventory::validate;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct FetchQuery {
    model: Option<String>,
    trim: Option<String>,
}

/// Uniform error body for every non-200 response. Field names follow the
/// wire contract, including the space in "status code".
#[derive(Serialize)]
pub struct ErrorEnvelope {
    message: String,
    #[serde(rename = "status code")]
    status_code: u16,
    uri: String,
    timestamp: DateTime<Utc>,
    reason: String,
}

fn error_response(status: StatusCode, message: &str, uri: &Uri) -> axum::response::Response {
    let body = ErrorEnvelope {
        message: message.to_string(),
        status_code: status.as_u16(),
        uri: uri.path().to_string(),
        timestamp: Utc::now(),
        reason: status
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string(),
    };
    (status, Json(body)).into_response()
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

async fn fetch_jeeps(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<FetchQuery>,
) -> axum::response::Response {
    let (Some(model), Some(trim)) = (query.model, query.trim) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "both 'model' and 'trim' query parameters are required",
            &uri,
        );
    };

    let validated = match validate(&model, &trim) {
        Ok(v) => v,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string(), &uri),
    };

    match state.inventory.fetch(validated.model, &validated.trim).await {
        Ok(jeeps) if jeeps.is_empty() => error_response(
            StatusCode::NOT_FOUND,
            &format!("no jeeps found for model={} trim={}", validated.model, validated.trim),
            &uri,
        ),
        Ok(jeeps) => Json(jeeps).into_response(),
        Err(e) => {
            // Internal detail goes to the log, never to the caller.
            tracing::error!(error = %e, "inventory lookup failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "an unexpected error occurred while fetching jeeps",
                &uri,
            )
        },
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/jeeps", get(fetch_jeeps))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
