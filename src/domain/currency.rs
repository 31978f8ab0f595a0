//! # Currency Code Value Object
//!
//! ISO 4217 currency code representation.
//!
//! This module provides the [`CurrencyCode`] type for representing
//! three-letter currency codes such as `USD`, `EUR` or `JPY`.
//!
//! # Examples
//!
//! ```
//! use currency_service::domain::currency::CurrencyCode;
//!
//! let code = CurrencyCode::new("usd").unwrap();
//! assert_eq!(code.as_str(), "USD");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for currency code parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyCodeError {
    /// Code string is empty.
    #[error("currency code cannot be empty")]
    Empty,

    /// Code is not exactly three characters long.
    #[error("invalid currency code length: expected 3 letters, got '{0}'")]
    InvalidLength(String),

    /// Code contains non-alphabetic characters.
    #[error("currency code contains invalid characters: '{0}'")]
    InvalidCharacters(String),
}

/// A validated three-letter currency code.
///
/// The code is stored in uppercase. Only the ISO 4217 *shape* is validated
/// here; whether a code is actually convertible is decided by the rate
/// provider that resolves it.
///
/// # Invariants
///
/// - Exactly three ASCII letters
/// - Always uppercase
///
/// # Examples
///
/// ```
/// use currency_service::domain::currency::CurrencyCode;
///
/// let code = CurrencyCode::new("eur").unwrap();
/// assert_eq!(code.to_string(), "EUR");
///
/// let parsed: CurrencyCode = "JPY".parse().unwrap();
/// assert_eq!(parsed.as_str(), "JPY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a new currency code from a string.
    ///
    /// The input is normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyCodeError` if the string is empty, is not exactly
    /// three characters long, or contains non-ASCII-alphabetic characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CurrencyCodeError> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(CurrencyCodeError::Empty);
        }

        if value.len() != 3 {
            return Err(CurrencyCodeError::InvalidLength(value.to_string()));
        }

        if !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyCodeError::InvalidCharacters(value.to_string()));
        }

        Ok(Self(value.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_to_uppercase() {
        let code = CurrencyCode::new("usd").unwrap();
        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn new_accepts_uppercase() {
        let code = CurrencyCode::new("EUR").unwrap();
        assert_eq!(code.as_str(), "EUR");
    }

    #[test]
    fn new_trims_whitespace() {
        let code = CurrencyCode::new(" GBP ").unwrap();
        assert_eq!(code.as_str(), "GBP");
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(CurrencyCode::new(""), Err(CurrencyCodeError::Empty));
    }

    #[test]
    fn new_rejects_wrong_length() {
        assert!(matches!(
            CurrencyCode::new("US"),
            Err(CurrencyCodeError::InvalidLength(_))
        ));
        assert!(matches!(
            CurrencyCode::new("USDT"),
            Err(CurrencyCodeError::InvalidLength(_))
        ));
    }

    #[test]
    fn new_rejects_non_alphabetic() {
        assert!(matches!(
            CurrencyCode::new("U$D"),
            Err(CurrencyCodeError::InvalidCharacters(_))
        ));
        assert!(matches!(
            CurrencyCode::new("123"),
            Err(CurrencyCodeError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn from_str_roundtrip() {
        let code: CurrencyCode = "jpy".parse().unwrap();
        assert_eq!(code.to_string(), "JPY");
    }

    #[test]
    fn serde_roundtrip() {
        let code = CurrencyCode::new("CAD").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"CAD\"");

        let back: CurrencyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<CurrencyCode, _> = serde_json::from_str("\"not-a-code\"");
        assert!(result.is_err());
    }
}
