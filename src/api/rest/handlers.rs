//! # REST Handlers
//!
//! Request handlers for the conversion engine's internal HTTP interface.
//!
//! # Endpoints
//!
//! - `GET /_healthz` - Liveness check, always answers `SERVING`
//! - `GET /supported` - JSON array of supported currency codes
//! - `POST /convert` - Converts a monetary amount into a target currency

use crate::application::conversion::ConversionService;
use crate::application::error::ApplicationError;
use crate::domain::currency::CurrencyCode;
use crate::domain::money::Money;
use crate::infrastructure::rates::SupportedCurrencies;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Body returned by the liveness endpoint.
pub const SERVING: &str = "SERVING";

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for REST handlers.
#[derive(Debug)]
pub struct AppState {
    /// The conversion engine.
    pub converter: Arc<ConversionService>,
    /// The supported currency enumeration, loaded once at startup.
    pub currencies: Arc<SupportedCurrencies>,
}

// ============================================================================
// Error Response
// ============================================================================

/// Standard error response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<ApplicationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ApplicationError) -> Self {
        let (status, code) = match &err {
            ApplicationError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApplicationError::RateUnavailable(_) => (StatusCode::BAD_GATEWAY, "RATE_UNAVAILABLE"),
            ApplicationError::DownstreamUnavailable(_) => {
                (StatusCode::BAD_GATEWAY, "DOWNSTREAM_UNAVAILABLE")
            }
            ApplicationError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        (status, Json(ErrorResponse::new(code, err.to_string())))
    }
}

// ============================================================================
// Conversion DTOs
// ============================================================================

/// Request body for the conversion endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    /// The amount to convert.
    pub from: Money,
    /// The target currency code.
    pub to: CurrencyCode,
}

// ============================================================================
// Handlers
// ============================================================================

/// Liveness endpoint; always reports serving.
pub async fn health_check() -> &'static str {
    SERVING
}

/// Returns the supported currency codes.
#[instrument(skip(state))]
pub async fn supported_currencies(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.currencies.codes().to_vec())
}

/// Converts a monetary amount into the target currency.
///
/// Rate source failures surface as a non-2xx error envelope; the caller
/// (the protocol bridge) decides how to degrade.
#[instrument(skip(state, request))]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<Money>, (StatusCode, Json<ErrorResponse>)> {
    info!("received conversion request");

    let converted = state
        .converter
        .convert(&request.from, &request.to)
        .await
        .map_err(|err| {
            error!("conversion request failed: {err}");
            <(StatusCode, Json<ErrorResponse>)>::from(err)
        })?;

    Ok(Json(converted))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn error_response_new() {
        let response = ErrorResponse::new("RATE_UNAVAILABLE", "source down");
        assert_eq!(response.code, "RATE_UNAVAILABLE");
        assert_eq!(response.message, "source down");
    }

    #[test]
    fn rate_unavailable_maps_to_bad_gateway() {
        let err = ApplicationError::rate_unavailable("source down");
        let (status, Json(body)) = <(StatusCode, Json<ErrorResponse>)>::from(err);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, "RATE_UNAVAILABLE");
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApplicationError::validation("missing field");
        let (status, Json(body)) = <(StatusCode, Json<ErrorResponse>)>::from(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_ERROR");
    }

    #[test]
    fn internal_maps_to_server_error() {
        let err = ApplicationError::internal("boom");
        let (status, _) = <(StatusCode, Json<ErrorResponse>)>::from(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn convert_request_deserializes() {
        let request: ConvertRequest = serde_json::from_str(
            r#"{"from": {"currency_code": "USD", "units": 10, "nanos": 0}, "to": "EUR"}"#,
        )
        .unwrap();
        assert_eq!(request.from.units(), 10);
        assert_eq!(request.to.as_str(), "EUR");
    }
}
