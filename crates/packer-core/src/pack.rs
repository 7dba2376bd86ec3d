//! # Pack Sizes and Order Quantities
//!
//! Newtype wrappers for the two positive integers the optimizer consumes.
//! You cannot pass an order quantity where a pack size is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A fixed, positive number of items sold as one shippable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct PackSize(u64);

impl PackSize {
    /// Validate a raw integer as a pack size.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::NonPositiveSize(raw));
        }
        Ok(Self(raw as u64))
    }

    /// Number of items in one pack of this size.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Validate a whole batch. The first non-positive entry rejects the batch.
    pub fn parse_batch(raw: &[i64]) -> Result<Vec<Self>, ValidationError> {
        raw.iter().map(|&r| Self::new(r)).collect()
    }
}

impl TryFrom<i64> for PackSize {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<PackSize> for u64 {
    fn from(size: PackSize) -> Self {
        size.0
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of items a single order asks for. Request-scoped, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct OrderQuantity(u64);

impl OrderQuantity {
    /// Validate a raw integer as an order quantity.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::NonPositiveQuantity(raw));
        }
        Ok(Self(raw as u64))
    }

    /// Number of items requested.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for OrderQuantity {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<OrderQuantity> for u64 {
    fn from(quantity: OrderQuantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for OrderQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
