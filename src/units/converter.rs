// ============================================================================
// Unit Converter
// Scales amounts between the smallest ledger unit and a display denomination
// ============================================================================

use crate::numeric::{with_significant_digits, ScaleError, ScaleResult, WORKING_PRECISION};
use crate::units::amount::Amount;
use crate::units::registry::{scale_factor, DEFAULT_DENOMINATION, MAX_SMALLEST_UNIT};
use alloy_primitives::U256;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

/// Convert a smallest-unit amount to the default display denomination.
///
/// The quotient is exact: division by a power of ten only moves the decimal
/// point, and the working precision leaves room for every 256-bit operand.
/// The range precondition is discharged by the `U256` input type.
///
/// # Example
/// ```
/// use alloy_primitives::U256;
/// use ledger_units::scale_down;
///
/// let display = scale_down(U256::from(1_500_000u64));
/// assert_eq!(display.to_string(), "1.5");
/// ```
pub fn scale_down(amount: U256) -> BigDecimal {
    scale_down_in(DEFAULT_DENOMINATION, amount).expect("default denomination is registered")
}

/// Convert a smallest-unit amount to the named display denomination.
///
/// # Errors
/// Returns `UnknownDenomination` if `denomination` has no scale factor.
pub fn scale_down_in(denomination: &str, amount: U256) -> ScaleResult<BigDecimal> {
    let scale = scale_factor(denomination).ok_or(ScaleError::UnknownDenomination)?;

    // Zero short-circuits to a plain zero, never a computed quotient.
    if amount.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let value = decimal_from_u256(amount);
    Ok(with_significant_digits(&(value / scale), WORKING_PRECISION))
}

/// Convert a display-unit amount to the smallest unit of the default
/// denomination.
///
/// Accepts anything convertible into [`Amount`]: whole numbers, decimal
/// strings, floats, and `BigDecimal` values.
///
/// # Errors
/// - `OutOfRange` if the result falls outside [0, 2^256 - 1]
/// - `NonFinite` for NaN or infinite float input
/// - `Unparseable` for strings that are not decimal numbers
///
/// # Example
/// ```
/// use alloy_primitives::U256;
/// use ledger_units::scale_up;
///
/// assert_eq!(scale_up("0.000001").unwrap(), U256::from(1u64));
/// assert_eq!(scale_up(1.5).unwrap(), U256::from(1_500_000u64));
/// ```
pub fn scale_up<A: Into<Amount>>(amount: A) -> ScaleResult<U256> {
    scale_up_in(DEFAULT_DENOMINATION, amount)
}

/// Convert a display-unit amount to the smallest unit of the named
/// denomination.
///
/// Fractional inputs below one display unit are rescaled by the digit count
/// their string form implies: the value is rounded to that many significant
/// digits and shifted into an integer, while the scale factor is divided by
/// the same power of ten. The product is unchanged, but the smallest
/// fractions survive with exactly the precision they were written with.
///
/// The final result is truncated toward zero; fractional remainders beyond
/// the smallest unit are dropped, not rounded.
pub fn scale_up_in<A: Into<Amount>>(denomination: &str, amount: A) -> ScaleResult<U256> {
    let mut scale = scale_factor(denomination)
        .ok_or(ScaleError::UnknownDenomination)?
        .clone();
    let (mut value, repr) = amount.into().into_parts()?;

    if value.is_zero() {
        return Ok(U256::ZERO);
    }

    if value < BigDecimal::one() {
        if let Some(dot) = repr.find('.') {
            let digits = (repr.len() - dot - 1) as u64;
            if digits > 0 {
                tracing::debug!("rescaling fractional amount by 10^{}", digits);
                let shift = power_of_ten(digits);
                value = with_significant_digits(&value, digits) * &shift;
                scale = scale / shift;
            }
        }
    }

    let product = with_significant_digits(&(value * scale), WORKING_PRECISION);

    // Range is checked on the decimal result, before truncation.
    if product < BigDecimal::zero() || product > *MAX_SMALLEST_UNIT {
        return Err(ScaleError::OutOfRange);
    }

    let (integral, _) = product
        .with_scale_round(0, RoundingMode::Down)
        .into_bigint_and_exponent();
    Ok(u256_from_bigint(&integral))
}

/// Exact decimal form of a 256-bit integer.
fn decimal_from_u256(value: U256) -> BigDecimal {
    let bytes = value.to_be_bytes::<32>();
    BigDecimal::from(BigInt::from_bytes_be(Sign::Plus, &bytes))
}

/// 10^exponent as a decimal.
fn power_of_ten(exponent: u64) -> BigDecimal {
    BigDecimal::new(BigInt::one(), -(exponent as i64))
}

/// Non-negative integer already checked against the 256-bit range.
fn u256_from_bigint(value: &BigInt) -> U256 {
    let (_, bytes) = value.to_bytes_be();
    U256::from_be_slice(&bytes)
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trips_through_display_units(limbs in any::<[u64; 4]>()) {
            let amount = U256::from_limbs(limbs);
            let display = scale_down(amount);
            prop_assert_eq!(scale_up(display).unwrap(), amount);
        }

        #[test]
        fn whole_inputs_scale_by_one_million(raw in any::<u64>()) {
            let expected = U256::from(raw) * U256::from(1_000_000u64);
            prop_assert_eq!(scale_up(raw).unwrap(), expected);
        }

        #[test]
        fn string_and_decimal_paths_agree(raw in any::<u64>()) {
            let display = scale_down(U256::from(raw));
            let from_text = scale_up(display.to_string()).unwrap();
            let from_decimal = scale_up(display).unwrap();
            prop_assert_eq!(from_text, from_decimal);
        }
    }
}
