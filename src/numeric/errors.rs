// ============================================================================
// Scale Errors
// Error types for denomination scaling operations
// ============================================================================

use std::fmt;

/// Errors that can occur while scaling amounts between denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleError {
    /// Smallest-unit value outside [0, 2^256 - 1]
    OutOfRange,
    /// Float input was NaN or infinite
    NonFinite,
    /// String input is not a decimal number
    Unparseable,
    /// Denomination name has no entry in the scale table
    UnknownDenomination,
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::OutOfRange => write!(
                f,
                "amount out of range: smallest-unit value must lie in [0, 2^256 - 1]"
            ),
            ScaleError::NonFinite => {
                write!(f, "unsupported amount: f64 input must be finite")
            }
            ScaleError::Unparseable => {
                write!(f, "invalid amount: could not parse decimal string")
            }
            ScaleError::UnknownDenomination => {
                write!(
                    f,
                    "unknown denomination: no scale factor registered under that name"
                )
            }
        }
    }
}

impl std::error::Error for ScaleError {}

/// Result type alias for scaling operations
pub type ScaleResult<T> = Result<T, ScaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ScaleError::OutOfRange.to_string(),
            "amount out of range: smallest-unit value must lie in [0, 2^256 - 1]"
        );
        assert_eq!(
            ScaleError::NonFinite.to_string(),
            "unsupported amount: f64 input must be finite"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ScaleError::OutOfRange, ScaleError::OutOfRange);
        assert_ne!(ScaleError::OutOfRange, ScaleError::Unparseable);
    }
}
