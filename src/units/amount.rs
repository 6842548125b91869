// ============================================================================
// Amount
// Tagged display-unit amount covering every accepted input representation
// ============================================================================

use crate::numeric::{ScaleError, ScaleResult};
use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// A display-unit amount in one of the accepted representations.
///
/// Each variant keeps its own parsing rule:
/// - `Whole` and `Text` parse directly into an arbitrary-precision decimal
/// - `Float` goes through its decimal string form first, so binary rounding
///   artifacts never reach the decimal domain
/// - `Decimal` is used as-is
///
/// `From` conversions let call sites pass native values directly:
///
/// ```ignore
/// scale_up(1_000_000u64)?;
/// scale_up("1.5")?;
/// scale_up(0.000001f64)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Amount {
    /// Whole number of display units
    Whole(U256),
    /// Decimal string, e.g. "1.5"
    Text(String),
    /// Binary float, converted via its decimal string form
    Float(f64),
    /// Arbitrary-precision decimal
    Decimal(BigDecimal),
}

impl Amount {
    /// Resolve to the decimal value plus the string form that the
    /// fractional-input rescale inspects for a decimal separator.
    pub(crate) fn into_parts(self) -> ScaleResult<(BigDecimal, String)> {
        match self {
            Amount::Whole(value) => {
                let repr = value.to_string();
                let decimal =
                    BigDecimal::from_str(&repr).map_err(|_| ScaleError::Unparseable)?;
                Ok((decimal, repr))
            }
            Amount::Text(repr) => {
                let repr = repr.trim().to_string();
                let decimal =
                    BigDecimal::from_str(&repr).map_err(|_| ScaleError::Unparseable)?;
                Ok((decimal, repr))
            }
            Amount::Float(value) => {
                if !value.is_finite() {
                    return Err(ScaleError::NonFinite);
                }
                // Shortest round-trip decimal form, never the binary fraction
                let repr = format!("{}", value);
                let decimal =
                    BigDecimal::from_str(&repr).map_err(|_| ScaleError::Unparseable)?;
                Ok((decimal, repr))
            }
            Amount::Decimal(decimal) => {
                let repr = decimal.to_string();
                Ok((decimal, repr))
            }
        }
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Amount::Whole(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::Whole(U256::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Amount::Whole(U256::from(value))
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_owned())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Float(value)
    }
}

impl From<BigDecimal> for Amount {
    fn from(value: BigDecimal) -> Self {
        Amount::Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_parts() {
        let (decimal, repr) = Amount::from(42u64).into_parts().unwrap();
        assert_eq!(decimal, BigDecimal::from(42u64));
        assert_eq!(repr, "42");
    }

    #[test]
    fn test_text_parts() {
        let (decimal, repr) = Amount::from("1.5").into_parts().unwrap();
        assert_eq!(decimal, BigDecimal::from_str("1.5").unwrap());
        assert_eq!(repr, "1.5");
    }

    #[test]
    fn test_text_trims_whitespace() {
        let (decimal, repr) = Amount::from(" 0.25 ").into_parts().unwrap();
        assert_eq!(decimal, BigDecimal::from_str("0.25").unwrap());
        assert_eq!(repr, "0.25");
    }

    #[test]
    fn test_float_goes_through_string_form() {
        let (from_float, repr) = Amount::from(1.5f64).into_parts().unwrap();
        let (from_text, _) = Amount::from("1.5").into_parts().unwrap();
        assert_eq!(from_float, from_text);
        assert_eq!(repr, "1.5");
    }

    #[test]
    fn test_non_finite_float_rejected() {
        assert_eq!(
            Amount::from(f64::NAN).into_parts(),
            Err(ScaleError::NonFinite)
        );
        assert_eq!(
            Amount::from(f64::INFINITY).into_parts(),
            Err(ScaleError::NonFinite)
        );
    }

    #[test]
    fn test_unparseable_text_rejected() {
        assert_eq!(
            Amount::from("not_a_number").into_parts(),
            Err(ScaleError::Unparseable)
        );
    }

    #[test]
    fn test_decimal_used_as_is() {
        let input = BigDecimal::from_str("0.000001").unwrap();
        let (decimal, repr) = Amount::from(input.clone()).into_parts().unwrap();
        assert_eq!(decimal, input);
        assert!(repr.contains('.'));
    }
}
