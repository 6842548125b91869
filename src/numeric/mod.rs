// ============================================================================
// Numeric Module
// Exact decimal arithmetic support for denomination scaling
// ============================================================================
//
// This module provides:
// - ScaleError: error types for conversion operations
// - WORKING_PRECISION: the significant-digit budget for decimal arithmetic
//
// Design principles:
// - No binary floating-point in any computation path
// - All fallible operations return Result (no panics)
// - Precision is scoped per operation, never ambient state

mod errors;
mod precision;

pub use errors::{ScaleError, ScaleResult};
pub use precision::WORKING_PRECISION;

pub(crate) use precision::with_significant_digits;
