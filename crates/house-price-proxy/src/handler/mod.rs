//! HTTP handler for the prediction proxy
//!
//! Routes:
//! - POST /predict - validate a house record and forward it upstream
//! - GET /health - liveness check, never contacts the upstream

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use house_price_core::validate_house_record;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::client::PredictionServiceClient;
use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::{SERVICE_NAME, SERVICE_VERSION};

/// Application state
pub struct AppState {
    pub client: PredictionServiceClient,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            client: PredictionServiceClient::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProxyConfig::default())
    }
}

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/predict", post(predict))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        upstream: state.client.config().api_url().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// POST /predict
///
/// The body is read raw so that malformed JSON and a missing
/// `Content-Type` both land in the same 400 path as schema failures.
async fn predict(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request_id = Uuid::new_v4();
    let start = Instant::now();

    let result = relay_prediction(&state, &body).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => tracing::info!(
            request_id = %request_id,
            duration_ms = duration_ms,
            "Prediction relayed"
        ),
        Err(ProxyError::Transport(reason)) => tracing::warn!(
            request_id = %request_id,
            error = %reason,
            duration_ms = duration_ms,
            "Prediction service unreachable"
        ),
        Err(ProxyError::InvalidResponse(reason)) => tracing::warn!(
            request_id = %request_id,
            error = %reason,
            duration_ms = duration_ms,
            "Prediction service returned invalid JSON"
        ),
        Err(err) => tracing::info!(
            request_id = %request_id,
            code = err.error_code(),
            status = %err.status_code(),
            duration_ms = duration_ms,
            "Prediction request rejected"
        ),
    }

    result
}

async fn relay_prediction(state: &AppState, body: &[u8]) -> Result<Response, ProxyError> {
    let input: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ProxyError::MalformedBody(e.to_string()))?;

    let record = validate_house_record(&input)?;
    let upstream_body = state.client.forward(&record).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], upstream_body).into_response())
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub upstream: String,
    pub timestamp: String,
}
