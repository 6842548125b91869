// ============================================================================
// Units Module
// Denomination scale table and the conversion operations built on it
// ============================================================================

pub mod amount;
pub mod converter;
pub mod registry;

pub use amount::Amount;
pub use converter::{scale_down, scale_down_in, scale_up, scale_up_in};
pub use registry::{scale_factor, DEFAULT_DENOMINATION, DEFAULT_SCALE};
