// ============================================================================
// Denomination Registry
// Immutable scale table mapping denomination names to decimal scale factors
// ============================================================================

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Denomination the plain `scale_down` / `scale_up` calls operate on.
pub const DEFAULT_DENOMINATION: &str = "unit";

/// Smallest units per display unit for the default denomination.
pub const DEFAULT_SCALE: u64 = 1_000_000;

/// The scale table. Built on first access, read-only afterwards; concurrent
/// readers need no synchronization.
static SCALE_TABLE: Lazy<HashMap<&'static str, BigDecimal>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(DEFAULT_DENOMINATION, BigDecimal::from(DEFAULT_SCALE));
    table
});

/// Largest representable smallest-unit value (2^256 - 1) as a decimal.
pub(crate) static MAX_SMALLEST_UNIT: Lazy<BigDecimal> = Lazy::new(|| {
    let bytes = U256::MAX.to_be_bytes::<32>();
    BigDecimal::from(BigInt::from_bytes_be(Sign::Plus, &bytes))
});

/// Look up the scale factor registered under `name`.
///
/// Returns `None` for denominations the table does not know about.
pub fn scale_factor(name: &str) -> Option<&'static BigDecimal> {
    SCALE_TABLE.get(name)
}
