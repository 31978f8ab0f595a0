//! # Engine Client
//!
//! HTTP client for the conversion engine, used by the protocol bridge.
//!
//! This module provides the [`EngineClient`] which implements the
//! [`ConversionBackend`] trait over the engine's internal HTTP interface:
//! `POST /convert` and `GET /supported`. Transport errors, timeouts,
//! non-success statuses and malformed payloads all surface as
//! `DownstreamUnavailable` so the bridge can apply its fallback policy
//! uniformly.
//!
//! # Examples
//!
//! ```
//! use currency_service::infrastructure::engine_client::{EngineClient, EngineClientConfig};
//!
//! let config = EngineClientConfig::new("http://127.0.0.1:7001").with_timeout_ms(3000);
//! let client = EngineClient::new(config).unwrap();
//! ```

use crate::application::bridge::ConversionBackend;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::currency::CurrencyCode;
use crate::domain::money::Money;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Configuration for the engine client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineClientConfig {
    /// Base URL of the conversion engine.
    base_url: String,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl EngineClientConfig {
    /// Creates a configuration for the given engine base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets the request timeout in milliseconds.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the engine base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Builds the URL of the conversion endpoint.
    #[must_use]
    pub fn convert_url(&self) -> String {
        format!("{}/convert", self.base_url.trim_end_matches('/'))
    }

    /// Builds the URL of the enumeration endpoint.
    #[must_use]
    pub fn supported_url(&self) -> String {
        format!("{}/supported", self.base_url.trim_end_matches('/'))
    }
}

/// Request body for the engine's conversion endpoint.
#[derive(Debug, Serialize)]
struct ConvertRequestBody<'a> {
    from: &'a Money,
    to: &'a str,
}

/// HTTP client forwarding bridge calls to the conversion engine.
#[derive(Debug)]
pub struct EngineClient {
    /// Configuration.
    config: EngineClientConfig,
    /// HTTP client for engine requests.
    client: reqwest::Client,
}

impl EngineClient {
    /// Creates a new engine client.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(config: EngineClientConfig) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms()))
            .build()
            .map_err(|e| ApplicationError::internal(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineClientConfig {
        &self.config
    }
}

#[async_trait]
impl ConversionBackend for EngineClient {
    async fn convert(&self, from: &Money, to_code: &CurrencyCode) -> ApplicationResult<Money> {
        let body = ConvertRequestBody {
            from,
            to: to_code.as_str(),
        };

        let response = self
            .client
            .post(self.config.convert_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApplicationError::downstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApplicationError::downstream(format!(
                "conversion endpoint returned status {}",
                response.status()
            )));
        }

        response
            .json::<Money>()
            .await
            .map_err(|e| ApplicationError::downstream(format!("malformed conversion payload: {e}")))
    }

    async fn supported_currencies(&self) -> ApplicationResult<Vec<String>> {
        let response = self
            .client
            .get(self.config.supported_url())
            .send()
            .await
            .map_err(|e| ApplicationError::downstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApplicationError::downstream(format!(
                "enumeration endpoint returned status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| ApplicationError::downstream(format!("malformed enumeration payload: {e}")))
    }
}
