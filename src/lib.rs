// ============================================================================
// Ledger Units Library
// Exact conversion between a ledger's smallest unit and display denomination
// ============================================================================

//! # Ledger Units
//!
//! Converts amounts between a ledger's smallest indivisible unit and its
//! human-readable display denomination, using arbitrary-precision decimal
//! arithmetic throughout. No binary floating-point value ever enters a
//! computation path, so results are exact for the full 256-bit range.
//!
//! ## Features
//!
//! - **Exact arithmetic** via `bigdecimal` with generous working precision
//! - **Full 256-bit range** for smallest-unit amounts (`U256`)
//! - **Polymorphic input**: whole numbers, decimal strings, floats, and
//!   `BigDecimal` values all convert, each through its own parsing rule
//! - **Immutable scale table** keyed by denomination name, safe for
//!   unsynchronized concurrent reads
//!
//! ## Example
//!
//! ```rust
//! use alloy_primitives::U256;
//! use ledger_units::prelude::*;
//!
//! // One display unit is 1_000_000 smallest units.
//! let display = scale_down(U256::from(1_500_000u64));
//! assert_eq!(display.to_string(), "1.5");
//!
//! // Every accepted representation scales up the same way.
//! assert_eq!(scale_up("1.5").unwrap(), U256::from(1_500_000u64));
//! assert_eq!(scale_up(1.5).unwrap(), U256::from(1_500_000u64));
//! assert_eq!(scale_up("0.000001").unwrap(), U256::from(1u64));
//! ```

pub mod numeric;
pub mod units;

// Re-exports for convenience
pub use units::{scale_down, scale_down_in, scale_up, scale_up_in};

pub mod prelude {
    pub use crate::numeric::{ScaleError, ScaleResult, WORKING_PRECISION};
    pub use crate::units::{
        scale_down, scale_down_in, scale_factor, scale_up, scale_up_in, Amount,
        DEFAULT_DENOMINATION, DEFAULT_SCALE,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use alloy_primitives::U256;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn test_end_to_end_round_trip() {
        // A realistic balance: 1234.567891 display units
        let raw = U256::from(1_234_567_891u64);

        let display = scale_down(raw);
        assert_eq!(display, BigDecimal::from_str("1234.567891").unwrap());

        assert_eq!(scale_up(display).unwrap(), raw);
        assert_eq!(scale_up("1234.567891").unwrap(), raw);
    }

    #[test]
    fn test_zero_maps_to_zero_both_ways() {
        assert_eq!(scale_down(U256::ZERO), BigDecimal::from(0u64));
        assert_eq!(scale_up(0u64).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_errors_surface_to_caller() {
        assert_eq!(scale_up(f64::NAN), Err(ScaleError::NonFinite));
        assert_eq!(scale_up("one and a half"), Err(ScaleError::Unparseable));
        assert_eq!(scale_up(U256::MAX), Err(ScaleError::OutOfRange));
        assert_eq!(
            scale_up_in("parsec", 1u64),
            Err(ScaleError::UnknownDenomination)
        );
    }

    #[test]
    fn test_default_scale_factor_lookup() {
        let scale = scale_factor(DEFAULT_DENOMINATION).unwrap();
        assert_eq!(*scale, BigDecimal::from(DEFAULT_SCALE));
    }
}
