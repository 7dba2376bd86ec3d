//! # Pack Plans
//!
//! A [`PackPlan`] says "ship this many packs of this size". It is the sole
//! output of the optimizer and is created fresh for every order.
//!
//! ## Invariant
//!
//! Every stored count is strictly positive. Adding zero is a no-op and
//! taking the last pack of a size removes the entry.
//!
//! ## Wire Format
//!
//! Serializes as a JSON object keyed by the decimal pack size, ordered by
//! ascending size: `{"250":1,"5000":2}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::pack::{OrderQuantity, PackSize};

/// Mapping from pack size to the number of packs of that size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<PackSize, u64>",
    into = "BTreeMap<PackSize, u64>"
)]
pub struct PackPlan {
    entries: BTreeMap<PackSize, u64>,
}

impl PackPlan {
    /// An empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` packs of `size`.
    pub fn add(&mut self, size: PackSize, n: u64) {
        if n == 0 {
            return;
        }
        *self.entries.entry(size).or_insert(0) += n;
    }

    /// Remove up to `n` packs of `size`, dropping the entry when it reaches zero.
    pub fn take(&mut self, size: PackSize, n: u64) {
        if let Some(count) = self.entries.get_mut(&size) {
            *count = count.saturating_sub(n);
            if *count == 0 {
                self.entries.remove(&size);
            }
        }
    }

    /// Number of packs of `size` in the plan (zero when absent).
    pub fn count(&self, size: PackSize) -> u64 {
        self.entries.get(&size).copied().unwrap_or(0)
    }

    /// Total items shipped: `sum(size * count)`.
    pub fn total_items(&self) -> u64 {
        self.entries
            .iter()
            .map(|(size, count)| size.get().saturating_mul(*count))
            .fold(0u64, u64::saturating_add)
    }

    /// Total number of physical packs: `sum(count)`.
    pub fn pack_count(&self) -> u64 {
        self.entries.values().copied().fold(0u64, u64::saturating_add)
    }

    /// Items shipped beyond what the order asked for.
    pub fn surplus(&self, quantity: OrderQuantity) -> u64 {
        self.total_items().saturating_sub(quantity.get())
    }

    /// Whether the plan ships nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct pack sizes used.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (PackSize, u64)> + '_ {
        self.entries.iter().map(|(size, count)| (*size, *count))
    }
}

impl FromIterator<(PackSize, u64)> for PackPlan {
    fn from_iter<I: IntoIterator<Item = (PackSize, u64)>>(iter: I) -> Self {
        let mut plan = Self::new();
        for (size, n) in iter {
            plan.add(size, n);
        }
        plan
    }
}

impl TryFrom<BTreeMap<PackSize, u64>> for PackPlan {
    type Error = ValidationError;

    fn try_from(entries: BTreeMap<PackSize, u64>) -> Result<Self, Self::Error> {
        if let Some((size, _)) = entries.iter().find(|(_, count)| **count == 0) {
            return Err(ValidationError::ZeroCount(size.get()));
        }
        Ok(Self { entries })
    }
}

impl From<PackPlan> for BTreeMap<PackSize, u64> {
    fn from(plan: PackPlan) -> Self {
        plan.entries
    }
}
