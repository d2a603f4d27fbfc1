//! Client for the external prediction service
//!
//! `forward` is the proxy path: it keeps the upstream body opaque and
//! reports the outcome as an explicit tagged result. `predict` is the typed
//! path used by the CLI: it decodes a `PredictionResult` and extracts the
//! upstream `detail` message on failure.

use house_price_core::{HouseRecord, PredictionResult};
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::config::ProxyConfig;

/// Fallback message when a failed upstream response has no `detail`
pub const DEFAULT_FAILURE_DETAIL: &str = "Failed to get prediction";

/// Prediction service client
#[derive(Debug, Clone)]
pub struct PredictionServiceClient {
    config: ProxyConfig,
    client: reqwest::Client,
}

impl PredictionServiceClient {
    /// Create new client
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// POST a validated record upstream and hand back the raw outcome
    ///
    /// A 2xx answer yields its body bytes, which are guaranteed to be JSON;
    /// a 2xx answer with any other body is `ForwardError::InvalidResponse`.
    /// Any other status is returned untouched as `ForwardError::Upstream`.
    pub async fn forward(&self, record: &HouseRecord) -> Result<Vec<u8>, ForwardError> {
        let url = self.config.predict_url();
        tracing::debug!(url = %url, "Forwarding house record to prediction service");

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| ForwardError::Transport(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| ForwardError::Transport(e.to_string()))?
            .to_vec();

        if !status.is_success() {
            return Err(ForwardError::Upstream {
                status: status.as_u16(),
                body,
                content_type,
            });
        }

        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| ForwardError::InvalidResponse(e.to_string()))?;

        Ok(body)
    }

    /// Request a typed prediction
    pub async fn predict(&self, record: &HouseRecord) -> Result<PredictionResult, ClientError> {
        let url = self.config.predict_url();

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let body = response.bytes().await.unwrap_or_default();
            Err(ClientError::Server {
                status,
                detail: extract_detail(&body),
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Pull a human-readable `detail` out of an error body
fn extract_detail(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| match d {
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE_DETAIL.to_string())
}

/// Outcome of a failed forward
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The call could not be completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered 2xx with a body that is not JSON
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    /// The service answered with a non-success status
    #[error("Upstream error {status}")]
    Upstream {
        status: u16,
        body: Vec<u8>,
        content_type: Option<String>,
    },
}

/// Typed client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Server error {status}: {detail}")]
    Server { status: u16, detail: String },
}
