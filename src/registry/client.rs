//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - JSON body retrieval without retries

use crate::error::RegistryError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("outdates/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::ClientError {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a single GET request and parse the body as JSON
    ///
    /// The HTTP status is not inspected: registries answer unknown packages
    /// with a JSON error document, which callers treat as "no latest version".
    pub async fn get_json(&self, url: &str, package: &str) -> Result<Value, RegistryError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                };
                RegistryError::network_error(package, url, message)
            })?;

        let body = response.text().await.map_err(|e| {
            RegistryError::invalid_response(package, url, format!("failed to read body: {}", e))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            RegistryError::invalid_response(package, url, format!("failed to parse JSON: {}", e))
        })
    }
}
