//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures that can occur while serving a conversion
//! request: the rate source being unavailable, the downstream conversion
//! engine being unreachable from the bridge, and malformed input.

use crate::infrastructure::rates::RateError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The rate source is unreachable, malformed, or does not know the
    /// requested currency.
    #[error("rate unavailable: {0}")]
    RateUnavailable(String),

    /// The downstream conversion engine could not be reached or answered
    /// with a failure.
    #[error("downstream unavailable: {0}")]
    DownstreamUnavailable(String),

    /// Request validation failed.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a rate-unavailable error.
    #[must_use]
    pub fn rate_unavailable(message: impl Into<String>) -> Self {
        Self::RateUnavailable(message.into())
    }

    /// Creates a downstream-unavailable error.
    #[must_use]
    pub fn downstream(message: impl Into<String>) -> Self {
        Self::DownstreamUnavailable(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<RateError> for ApplicationError {
    fn from(err: RateError) -> Self {
        Self::RateUnavailable(err.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_unavailable_message() {
        let err = ApplicationError::rate_unavailable("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn downstream_message() {
        let err = ApplicationError::downstream("status 502");
        assert!(err.to_string().contains("status 502"));
    }

    #[test]
    fn validation_message() {
        let err = ApplicationError::validation("to_code is required");
        assert!(err.to_string().contains("to_code is required"));
    }

    #[test]
    fn from_rate_error() {
        let err: ApplicationError = RateError::unsupported("XXX").into();
        assert!(matches!(err, ApplicationError::RateUnavailable(_)));
        assert!(err.to_string().contains("XXX"));
    }
}
