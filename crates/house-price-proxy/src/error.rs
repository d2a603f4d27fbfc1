//! Error types for the prediction proxy
//!
//! Every failure a request can hit maps to exactly one variant, and every
//! variant maps to exactly one response shape.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use house_price_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

use crate::client::ForwardError;

/// Detail returned to callers when the prediction service is unreachable
pub const TRANSPORT_FAILURE_DETAIL: &str = "Failed to reach the prediction service";

/// Detail returned to callers when a 2xx upstream body is not JSON
pub const INVALID_RESPONSE_DETAIL: &str = "Prediction service returned an invalid response";

/// Errors surfaced by the `/predict` handler
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Request body is not JSON
    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),

    /// Request body failed the house schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Outbound call could not be completed
    #[error("Failed to reach the prediction service: {0}")]
    Transport(String),

    /// Prediction service answered 2xx with a non-JSON body
    #[error("Prediction service returned invalid JSON: {0}")]
    InvalidResponse(String),

    /// Prediction service answered with a non-success status
    #[error("Prediction service returned status {status}")]
    Upstream {
        status: u16,
        body: Vec<u8>,
        content_type: Option<String>,
    },
}

impl From<ForwardError> for ProxyError {
    fn from(err: ForwardError) -> Self {
        match err {
            ForwardError::Transport(reason) => ProxyError::Transport(reason),
            ForwardError::InvalidResponse(reason) => ProxyError::InvalidResponse(reason),
            ForwardError::Upstream {
                status,
                body,
                content_type,
            } => ProxyError::Upstream {
                status,
                body,
                content_type,
            },
        }
    }
}

impl ProxyError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ProxyError::MalformedBody(_) => "MALFORMED_BODY",
            ProxyError::Validation(_) => "VALIDATION_FAILED",
            ProxyError::Transport(_) => "TRANSPORT_ERROR",
            ProxyError::InvalidResponse(_) => "INVALID_UPSTREAM_RESPONSE",
            ProxyError::Upstream { .. } => "UPSTREAM_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ProxyError::Validation(_) => StatusCode::BAD_REQUEST,
            ProxyError::Transport(_) => StatusCode::BAD_REQUEST,
            ProxyError::InvalidResponse(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

/// JSON error body for errors raised by the proxy itself
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorBody>,
}

/// One entry of the field-level error list
#[derive(Debug, Serialize)]
pub struct FieldErrorBody {
    pub field: String,
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ProxyError::MalformedBody(reason) => {
                let body = ErrorBody {
                    detail: format!("Invalid JSON body: {}", reason),
                    errors: Vec::new(),
                };
                (status, Json(body)).into_response()
            }
            ProxyError::Validation(err) => {
                let detail = err.to_string();
                let errors = err
                    .into_violations()
                    .into_iter()
                    .map(|v| FieldErrorBody {
                        field: v.field,
                        code: v.kind.code(),
                        message: v.message,
                    })
                    .collect();
                (status, Json(ErrorBody { detail, errors })).into_response()
            }
            ProxyError::Transport(_) => {
                let body = ErrorBody {
                    detail: TRANSPORT_FAILURE_DETAIL.to_string(),
                    errors: Vec::new(),
                };
                (status, Json(body)).into_response()
            }
            ProxyError::InvalidResponse(_) => {
                let body = ErrorBody {
                    detail: INVALID_RESPONSE_DETAIL.to_string(),
                    errors: Vec::new(),
                };
                (status, Json(body)).into_response()
            }
            ProxyError::Upstream {
                body, content_type, ..
            } => {
                let mut response = (status, body).into_response();
                let headers = response.headers_mut();
                match content_type.and_then(|ct| HeaderValue::from_str(&ct).ok()) {
                    Some(value) => {
                        headers.insert(header::CONTENT_TYPE, value);
                    }
                    None => {
                        headers.remove(header::CONTENT_TYPE);
                    }
                }
                response
            }
        }
    }
}
