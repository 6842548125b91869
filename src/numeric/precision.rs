// ============================================================================
// Working Precision
// Significant-digit budget applied to every decimal computation
// ============================================================================

use bigdecimal::{BigDecimal, RoundingMode};
use std::num::NonZeroU64;

/// Significant decimal digits retained during scaling arithmetic.
///
/// 2^256 - 1 spans 78 decimal digits, so any precision at or above that
/// bound is exact for every representable operand. The ceiling is deliberate
/// headroom; it is never the limiting factor for in-range values.
pub const WORKING_PRECISION: u64 = 999;

/// Round `value` to `digits` significant digits, half-even.
///
/// Precision is applied per call; nothing persists between operations.
/// A zero digit count leaves the value untouched.
pub(crate) fn with_significant_digits(value: &BigDecimal, digits: u64) -> BigDecimal {
    match NonZeroU64::new(digits) {
        Some(prec) => value.with_precision_round(prec, RoundingMode::HalfEven),
        None => value.clone(),
    }
}
