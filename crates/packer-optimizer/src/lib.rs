//! # packer-optimizer: Pack Plan Computation
//!
//! Given a catalogue of pack sizes and an order quantity, compute the
//! [`PackPlan`] that ships the fewest items covering the order, and among
//! those, the fewest packs.
//!
//! ## Strategies
//!
//! | Strategy | Module | Guarantee |
//! |----------|--------|-----------|
//! | [`Strategy::BestFit`] | [`search`] + [`canonical`] | Minimum total, then minimum pack count |
//! | [`Strategy::FirstFit`] | [`first_fit`] | Greedy, largest sizes first; no optimality guarantee |
//!
//! Every function here is pure: no state survives between calls, so
//! concurrent orders never observe each other's search state. Input slices
//! are never mutated.

pub mod canonical;
pub mod first_fit;
pub mod search;

use std::fmt;
use std::str::FromStr;

use packer_core::{OrderQuantity, PackPlan, PackSize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use canonical::canonicalize;
pub use first_fit::first_fit;
pub use search::find_plan;

/// Which algorithm computes order plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Exhaustive combination search followed by canonical merging.
    #[default]
    BestFit,
    /// Greedy largest-first allocation.
    FirstFit,
}

impl Strategy {
    /// Compute a plan for `target` items using `sizes`.
    pub fn plan(self, sizes: &[PackSize], target: OrderQuantity) -> PackPlan {
        match self {
            Self::BestFit => find_plan(sizes, target),
            Self::FirstFit => first_fit(sizes, target),
        }
    }

    /// Stable kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestFit => "best-fit",
            Self::FirstFit => "first-fit",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized strategy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy {0:?}, expected \"best-fit\" or \"first-fit\"")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best-fit" | "bestfit" => Ok(Self::BestFit),
            "first-fit" | "firstfit" => Ok(Self::FirstFit),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(raw: &[i64]) -> Vec<PackSize> {
        PackSize::parse_batch(raw).unwrap()
    }

    #[test]
    fn strategy_parses_names() {
        assert_eq!("best-fit".parse::<Strategy>().unwrap(), Strategy::BestFit);
        assert_eq!("First-Fit".parse::<Strategy>().unwrap(), Strategy::FirstFit);
        assert_eq!("firstfit".parse::<Strategy>().unwrap(), Strategy::FirstFit);
        assert!("cheapest".parse::<Strategy>().is_err());
    }

    #[test]
    fn strategy_display_round_trips() {
        for s in [Strategy::BestFit, Strategy::FirstFit] {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }

    #[test]
    fn default_is_best_fit() {
        assert_eq!(Strategy::default(), Strategy::BestFit);
    }

    #[test]
    fn strategies_diverge_on_751() {
        let catalogue = sizes(&[250, 500, 1000, 2000, 5000]);
        let q = OrderQuantity::new(751).unwrap();
        let best = Strategy::BestFit.plan(&catalogue, q);
        let first = Strategy::FirstFit.plan(&catalogue, q);
        assert_eq!(best.pack_count(), 1);
        assert_eq!(first.pack_count(), 2);
        assert_eq!(best.total_items(), first.total_items());
    }
}
