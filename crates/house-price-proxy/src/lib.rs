//! House Price Proxy
//!
//! Validates house records and forwards them to an external price
//! prediction service, relaying whatever that service answers.
//!
//! ## Architecture
//!
//! 1. **Config** (`config`): upstream base URL and listener settings.
//!
//! 2. **Client** (`client`): HTTP client for the prediction service. The
//!    raw forwarding call returns an explicit `Ok(body)` / `Err(ForwardError)`
//!    result; a typed call decodes `PredictionResult`.
//!
//! 3. **Handler** (`handler`): axum router exposing `POST /predict` and
//!    `GET /health`.
//!
//! 4. **Telemetry** (`telemetry`): tracing subscriber setup.
//!
//! ## Request lifecycle
//!
//! Received → Validated | Rejected → Forwarded → Relayed | Forwarded-Error.
//! No state is shared between requests apart from the immutable config and
//! the pooled HTTP client.

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod telemetry;

pub use client::{ClientError, ForwardError, PredictionServiceClient};
pub use config::{ProxyConfig, DEFAULT_API_URL};
pub use error::ProxyError;
pub use handler::{create_router, AppState};

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "house-price-proxy";

/// Service version (from Cargo.toml)
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
