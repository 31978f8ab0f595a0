//! # Money Value Object
//!
//! Fixed-point monetary amounts and the carry normalization rule.
//!
//! A [`Money`] splits an amount into whole `units` and fractional `nanos`
//! (10^-9 units). Multiplying by a floating conversion factor produces a
//! [`RawAmount`] whose fields are no longer integral; [`RawAmount::normalize`]
//! folds the overflow back into range (the "carry" rule) and truncates.
//!
//! # Examples
//!
//! ```
//! use currency_service::domain::currency::CurrencyCode;
//! use currency_service::domain::money::Money;
//!
//! let usd = CurrencyCode::new("USD").unwrap();
//! let amount = Money::new(usd, 10, 500_000_000).unwrap();
//! assert_eq!(amount.units(), 10);
//! assert_eq!(amount.nanos(), 500_000_000);
//! ```

use crate::domain::currency::CurrencyCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of nano units in one whole unit.
pub const NANOS_PER_UNIT: i64 = 1_000_000_000;

/// Error type for money construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Units or nanos are negative.
    #[error("amount cannot be negative: units={units}, nanos={nanos}")]
    Negative {
        /// Whole units of the rejected amount.
        units: i64,
        /// Nano units of the rejected amount.
        nanos: i32,
    },
}

/// A monetary amount in a given currency.
///
/// Amounts are non-negative. `nanos` may exceed `10^9 - 1` on input
/// (client-supplied amounts are not required to be normalized); every
/// conversion normalizes its result, so converted amounts always satisfy
/// `0 <= nanos < 10^9`.
///
/// The JSON wire shape is `{"currency_code": "...", "units": n, "nanos": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    currency_code: CurrencyCode,
    units: i64,
    nanos: i32,
}

impl Money {
    /// Creates a new monetary amount.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Negative` if `units` or `nanos` is negative.
    pub fn new(currency_code: CurrencyCode, units: i64, nanos: i32) -> Result<Self, MoneyError> {
        if units < 0 || nanos < 0 {
            return Err(MoneyError::Negative { units, nanos });
        }

        Ok(Self {
            currency_code,
            units,
            nanos,
        })
    }

    /// Normalizes a raw amount and stamps it with a currency code.
    ///
    /// Fractional remainders below one nano are discarded (truncation toward
    /// zero), which biases results slightly downward. The input is expected
    /// to be finite and non-negative.
    #[must_use]
    pub fn from_raw(currency_code: CurrencyCode, raw: RawAmount) -> Self {
        let (units, nanos) = raw.normalize();
        Self {
            currency_code,
            units,
            nanos,
        }
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency_code(&self) -> &CurrencyCode {
        &self.currency_code
    }

    /// Returns the whole units of the amount.
    #[inline]
    #[must_use]
    pub fn units(&self) -> i64 {
        self.units
    }

    /// Returns the nano (10^-9) units of the amount.
    #[inline]
    #[must_use]
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Scales both fields by a conversion factor.
    ///
    /// The result is an intermediate [`RawAmount`] that must be normalized
    /// before it is a valid amount again.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> RawAmount {
        RawAmount::new(self.units as f64 * factor, f64::from(self.nanos) * factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09} {}", self.units, self.nanos, self.currency_code)
    }
}

/// Serde representation of [`Money`], matching the JSON wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoneyRepr {
    currency_code: CurrencyCode,
    units: i64,
    nanos: i32,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.currency_code, repr.units, repr.nanos)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            currency_code: money.currency_code,
            units: money.units,
            nanos: money.nanos,
        }
    }
}

/// An unnormalized amount produced by scaling a [`Money`] by a factor.
///
/// Both fields are real numbers: `units` may carry a fractional part and
/// `nanos` may exceed 10^9. [`RawAmount::normalize`] brings both back into
/// range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawAmount {
    units: f64,
    nanos: f64,
}

impl RawAmount {
    /// Creates a raw amount from unnormalized fields.
    #[must_use]
    pub fn new(units: f64, nanos: f64) -> Self {
        Self { units, nanos }
    }

    /// Returns the unnormalized units.
    #[inline]
    #[must_use]
    pub fn units(&self) -> f64 {
        self.units
    }

    /// Returns the unnormalized nanos.
    #[inline]
    #[must_use]
    pub fn nanos(&self) -> f64 {
        self.nanos
    }

    /// Applies the carry rule and truncates to integral fields.
    ///
    /// The fractional part of `units` is folded into `nanos`, whole multiples
    /// of 10^9 nanos are folded back into `units`, and both fields are then
    /// floored. Defined for finite, non-negative input only; negative values
    /// never reach this path.
    #[must_use]
    pub fn normalize(self) -> (i64, i32) {
        let fraction_size = NANOS_PER_UNIT as f64;

        let mut nanos = self.nanos + self.units.fract() * fraction_size;
        let units = self.units.floor() + (nanos / fraction_size).floor();
        nanos %= fraction_size;

        (units.floor() as i64, nanos.floor() as i32)
    }
}
