//! # gRPC Conversions
//!
//! Conversions between Protocol Buffer messages and domain types.
//!
//! # Conversion Traits
//!
//! - `From<DomainType> for ProtoType` - Domain to proto (infallible)
//! - `TryFrom<ProtoType> for DomainType` - Proto to domain (fallible)

use crate::api::grpc::proto;
use crate::domain::currency::CurrencyCode;
use crate::domain::money::Money;
use thiserror::Error;

/// Error type for conversion failures.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Missing required field.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid field value.
    #[error("invalid {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// Error message.
        message: String,
    },
}

impl From<Money> for proto::Money {
    fn from(money: Money) -> Self {
        Self {
            currency_code: money.currency_code().to_string(),
            units: money.units(),
            nanos: money.nanos(),
        }
    }
}

impl TryFrom<proto::Money> for Money {
    type Error = ConversionError;

    fn try_from(proto: proto::Money) -> Result<Self, Self::Error> {
        let currency_code =
            CurrencyCode::new(&proto.currency_code).map_err(|e| ConversionError::InvalidValue {
                field: "currency_code",
                message: e.to_string(),
            })?;

        Money::new(currency_code, proto.units, proto.nanos).map_err(|e| {
            ConversionError::InvalidValue {
                field: "units/nanos",
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn money_to_proto() {
        let money = Money::new(CurrencyCode::new("USD").unwrap(), 10, 500_000_000).unwrap();
        let proto: proto::Money = money.into();

        assert_eq!(proto.currency_code, "USD");
        assert_eq!(proto.units, 10);
        assert_eq!(proto.nanos, 500_000_000);
    }

    #[test]
    fn proto_to_money() {
        let proto = proto::Money {
            currency_code: "EUR".to_string(),
            units: 8,
            nanos: 925_000_000,
        };

        let money: Money = proto.try_into().unwrap();
        assert_eq!(money.currency_code().as_str(), "EUR");
        assert_eq!(money.units(), 8);
        assert_eq!(money.nanos(), 925_000_000);
    }

    #[test]
    fn proto_to_money_invalid_code() {
        let proto = proto::Money {
            currency_code: "not-a-code".to_string(),
            units: 1,
            nanos: 0,
        };

        let result: Result<Money, _> = proto.try_into();
        assert!(matches!(
            result,
            Err(ConversionError::InvalidValue {
                field: "currency_code",
                ..
            })
        ));
    }

    #[test]
    fn proto_to_money_negative_amount() {
        let proto = proto::Money {
            currency_code: "USD".to_string(),
            units: -1,
            nanos: 0,
        };

        let result: Result<Money, _> = proto.try_into();
        assert!(matches!(
            result,
            Err(ConversionError::InvalidValue {
                field: "units/nanos",
                ..
            })
        ));
    }

    #[test]
    fn roundtrip() {
        let money = Money::new(CurrencyCode::new("JPY").unwrap(), 1234, 0).unwrap();
        let proto: proto::Money = money.clone().into();
        let back: Money = proto.try_into().unwrap();
        assert_eq!(back, money);
    }
}
