//! # Validation Errors
//!
//! Errors raised when raw integers are promoted into domain types.

use thiserror::Error;

/// A value failed domain validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Pack sizes must be strictly positive.
    #[error("pack size must be positive, got {0}")]
    NonPositiveSize(i64),

    /// Order quantities must be strictly positive.
    #[error("order quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),

    /// A batch of pack sizes was empty.
    #[error("at least one pack size is required")]
    EmptySizeList,

    /// A plan entry carried a zero count.
    #[error("plan entry for pack size {0} has a zero count")]
    ZeroCount(u64),
}
