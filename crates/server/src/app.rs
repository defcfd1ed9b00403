//! Router and handlers for the audit service.
//!
//! One page, one API endpoint: `GET /` serves the embedded form and
//! `POST /api/audit` runs the pipeline for the submitted URL. Every
//! invocation is independent; the shared state is read-only after startup.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use serde_json::json;
use siteaudit_core::{AuditConfig, AuditError, GeminiAnalyzer, audit_url};
use tower_http::cors::CorsLayer;
use tracing::info;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Read-only application state, built once at startup.
pub struct AppState {
    pub analyzer: GeminiAnalyzer,
    pub config: AuditConfig,
}

/// Builds the application router.
pub fn app(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/audit", post(audit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct AuditRequest {
    url: String,
}

async fn audit(State(state): State<Arc<AppState>>, Json(request): Json<AuditRequest>) -> Response {
    info!(url = %request.url, "audit requested");

    match audit_url(&request.url, &state.analyzer, &state.config).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            let status = error_status(&e);
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

/// Maps each pipeline error class to an HTTP status code.
fn error_status(error: &AuditError) -> StatusCode {
    match error {
        AuditError::EmptyUrl | AuditError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        AuditError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
        AuditError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        AuditError::HttpError(_)
        | AuditError::HttpStatus { .. }
        | AuditError::ApiError(_)
        | AuditError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
    }
}
