//! Proxy configuration
//!
//! The only setting is the base URL of the prediction service, read from
//! `API_URL` and defaulting to a local placeholder.

use serde::{Deserialize, Serialize};

/// Environment variable holding the prediction service base URL
pub const API_URL_ENV: &str = "API_URL";

/// Placeholder used when `API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for the prediction proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Base URL of the prediction service, without trailing slash
    api_url: String,
}

impl ProxyConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        let trimmed = api_url.trim().trim_end_matches('/');
        let api_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_url }
    }

    /// Load from the environment, falling back to the default URL
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) => Self::new(url),
            Err(_) => Self::default(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full URL of the upstream predict endpoint
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_url)
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
