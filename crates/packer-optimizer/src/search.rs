//! # Exhaustive Combination Search
//!
//! Explores combinations-with-repetition of the available sizes to find
//! the plan that covers the order with the smallest surplus.
//!
//! ## Traversal
//!
//! Sizes are sorted ascending. A combination is a non-decreasing sequence
//! of size indices, so each multiset is generated exactly once. The walk is
//! depth-first: a node's first child reuses its last size, later children
//! move to larger sizes. Any branch whose running total passes the search
//! limit is abandoned.
//!
//! ## Best-so-far
//!
//! Two records are kept while walking:
//!
//! - **under**: highest total not exceeding the target. A node replaces
//!   the record when its total is `>=` the recorded one, so among equal
//!   totals the node visited *last* survives. The empty combination seeds
//!   the record with total 0. Output stability depends on this ordering.
//! - **cover**: lowest total at or above the target, then fewest packs.
//!   Only a strictly better node replaces it.
//!
//! When `under` misses the target, one smallest pack is added to it. The
//! result is canonicalized, and `cover` takes over only when it beats that
//! plan on total items or pack count. The search limit
//! `target + smallest - 1` is tight enough to bound the walk and loose
//! enough that `cover` always holds an optimal plan.
//!
//! ## Cost
//!
//! The walk is exponential in `target / smallest`. Catalogues whose
//! smallest size is tiny relative to the order can run long; there is no
//! cancellation.

use packer_core::{OrderQuantity, PackPlan, PackSize};

use crate::canonical::canonicalize;

/// Working state of the depth-first walk.
struct SearchState {
    /// Chosen size indices, non-decreasing.
    path: Vec<usize>,
    counts: Vec<u64>,
    total: u64,
    packs: u64,
}

impl SearchState {
    fn new(width: usize) -> Self {
        Self {
            path: Vec::new(),
            counts: vec![0; width],
            total: 0,
            packs: 0,
        }
    }

    fn push(&mut self, idx: usize, size: u64) {
        self.path.push(idx);
        self.counts[idx] += 1;
        self.total += size;
        self.packs += 1;
    }

    fn pop(&mut self, sizes: &[u64]) -> Option<usize> {
        let idx = self.path.pop()?;
        self.counts[idx] -= 1;
        self.total -= sizes[idx];
        self.packs -= 1;
        Some(idx)
    }

    /// Total after adding `sizes[idx]`, if it stays within `limit`.
    fn fits(&self, sizes: &[u64], idx: usize, limit: u64) -> bool {
        idx < sizes.len()
            && self
                .total
                .checked_add(sizes[idx])
                .is_some_and(|next| next <= limit)
    }
}

/// Frozen copy of a combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub(crate) counts: Vec<u64>,
    pub(crate) total: u64,
    pub(crate) packs: u64,
}

impl Snapshot {
    fn of(state: &SearchState) -> Self {
        Self {
            counts: state.counts.clone(),
            total: state.total,
            packs: state.packs,
        }
    }

    fn to_plan(&self, catalogue: &[PackSize]) -> PackPlan {
        catalogue
            .iter()
            .zip(&self.counts)
            .map(|(size, count)| (*size, *count))
            .collect()
    }
}

/// Result of one walk.
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    pub(crate) under: Snapshot,
    pub(crate) cover: Option<Snapshot>,
    pub(crate) visited: u64,
}

/// Walk every combination of `sizes` up to `target + smallest - 1`.
///
/// `sizes` must be non-empty, ascending and free of duplicates; `target`
/// must be positive.
pub(crate) fn search(sizes: &[u64], target: u64) -> SearchOutcome {
    let limit = target.saturating_add(sizes[0] - 1);
    let mut state = SearchState::new(sizes.len());
    let mut under = Snapshot::of(&state);
    let mut cover: Option<Snapshot> = None;
    let mut visited = 0u64;

    'walk: loop {
        visited += 1;

        if state.total <= target && state.total >= under.total {
            under = Snapshot::of(&state);
        }

        if state.total >= target {
            let better = cover
                .as_ref()
                .map_or(true, |c| (state.total, state.packs) < (c.total, c.packs));
            if better {
                cover = Some(Snapshot::of(&state));
            }
        } else {
            let start = state.path.last().copied().unwrap_or(0);
            if state.fits(sizes, start, limit) {
                state.push(start, sizes[start]);
                continue 'walk;
            }
        }

        // Backtrack to the nearest ancestor with an unexplored larger size.
        // Sizes ascend, so once one sibling overshoots every later one does.
        loop {
            let Some(idx) = state.pop(sizes) else {
                break 'walk;
            };
            if state.fits(sizes, idx + 1, limit) {
                state.push(idx + 1, sizes[idx + 1]);
                continue 'walk;
            }
        }
    }

    SearchOutcome {
        under,
        cover,
        visited,
    }
}

/// Compute the plan covering `target` with the fewest items, then the
/// fewest packs.
///
/// Duplicate sizes are ignored and the input order does not matter. An
/// empty catalogue yields an empty plan.
pub fn find_plan(sizes: &[PackSize], target: OrderQuantity) -> PackPlan {
    let mut catalogue = sizes.to_vec();
    catalogue.sort_unstable();
    catalogue.dedup();

    let Some(&smallest) = catalogue.first() else {
        return PackPlan::new();
    };

    let raw: Vec<u64> = catalogue.iter().map(|s| s.get()).collect();
    let outcome = search(&raw, target.get());

    let mut plan = outcome.under.to_plan(&catalogue);
    if outcome.under.total < target.get() {
        plan.add(smallest, 1);
    }
    let mut plan = canonicalize(plan, &catalogue);

    if let Some(cover) = &outcome.cover {
        if (cover.total, cover.packs) < (plan.total_items(), plan.pack_count()) {
            tracing::debug!(
                fallback_total = plan.total_items(),
                fallback_packs = plan.pack_count(),
                cover_total = cover.total,
                cover_packs = cover.packs,
                "covering combination beats the smallest-pack fallback"
            );
            plan = canonicalize(cover.to_plan(&catalogue), &catalogue);
        }
    }

    tracing::debug!(
        target = target.get(),
        sizes = catalogue.len(),
        visited = outcome.visited,
        total = plan.total_items(),
        packs = plan.pack_count(),
        "pack search complete"
    );

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOGUE: [i64; 5] = [250, 500, 1000, 2000, 5000];

    fn sizes(raw: &[i64]) -> Vec<PackSize> {
        PackSize::parse_batch(raw).unwrap()
    }

    fn plan_for(raw: &[i64], target: i64) -> Vec<(u64, u64)> {
        find_plan(&sizes(raw), OrderQuantity::new(target).unwrap())
            .iter()
            .map(|(s, c)| (s.get(), c))
            .collect()
    }

    #[test]
    fn order_of_one_takes_smallest_pack() {
        assert_eq!(plan_for(&CATALOGUE, 1), vec![(250, 1)]);
    }

    #[test]
    fn exact_single_size() {
        assert_eq!(plan_for(&CATALOGUE, 250), vec![(250, 1)]);
        assert_eq!(plan_for(&CATALOGUE, 2000), vec![(2000, 1)]);
        assert_eq!(plan_for(&CATALOGUE, 5000), vec![(5000, 1)]);
    }

    #[test]
    fn order_of_251_uses_one_500() {
        assert_eq!(plan_for(&CATALOGUE, 251), vec![(500, 1)]);
    }

    #[test]
    fn order_of_501_prefers_less_surplus_over_fewer_packs() {
        assert_eq!(plan_for(&CATALOGUE, 501), vec![(250, 1), (500, 1)]);
    }

    #[test]
    fn order_of_751_merges_into_1000() {
        assert_eq!(plan_for(&CATALOGUE, 751), vec![(1000, 1)]);
    }

    #[test]
    fn order_of_1251() {
        assert_eq!(plan_for(&CATALOGUE, 1251), vec![(500, 1), (1000, 1)]);
    }

    #[test]
    fn order_of_12001() {
        assert_eq!(
            plan_for(&CATALOGUE, 12001),
            vec![(250, 1), (2000, 1), (5000, 2)]
        );
    }

    #[test]
    fn odd_catalogue_exact_multiples() {
        assert_eq!(plan_for(&[23, 37, 45, 100, 500], 46), vec![(23, 2)]);
        assert_eq!(plan_for(&[23, 70, 73, 100, 500], 69), vec![(23, 3)]);
    }

    #[test]
    fn input_order_and_duplicates_do_not_matter() {
        assert_eq!(
            plan_for(&[5000, 250, 2000, 250, 1000, 500], 12001),
            vec![(250, 1), (2000, 1), (5000, 2)]
        );
    }

    #[test]
    fn input_slice_is_not_mutated() {
        let catalogue = sizes(&[2000, 250, 5000, 500, 1000]);
        let before = catalogue.clone();
        let _ = find_plan(&catalogue, OrderQuantity::new(751).unwrap());
        assert_eq!(catalogue, before);
    }

    #[test]
    fn empty_catalogue_yields_empty_plan() {
        assert!(find_plan(&[], OrderQuantity::new(10).unwrap()).is_empty());
    }

    #[test]
    fn later_ties_overwrite_earlier_ones() {
        // 750 is reachable as 250+250+250 and as 250+500; the second is
        // visited later and must survive.
        let outcome = search(&[250, 500], 750);
        assert_eq!(outcome.under.counts, vec![1, 1]);
        assert_eq!(outcome.under.total, 750);
    }

    #[test]
    fn traversal_picks_last_visited_12000() {
        let outcome = search(&[250, 500, 1000, 2000, 5000], 12001);
        assert_eq!(outcome.under.total, 12000);
        assert_eq!(outcome.under.counts, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn empty_combination_seeds_under() {
        let outcome = search(&[250, 500], 1);
        assert_eq!(outcome.under.total, 0);
        assert_eq!(outcome.under.packs, 0);
    }

    #[test]
    fn cover_beats_smallest_pack_fallback() {
        // Under-target best is 3; adding another 3 ships 6, but one 5 ships less.
        assert_eq!(plan_for(&[3, 5], 4), vec![(5, 1)]);
        // Under-target best is 6 (3+3); fallback ships 9, 3+5 ships 8.
        assert_eq!(plan_for(&[3, 5], 7), vec![(3, 1), (5, 1)]);
    }

    #[test]
    fn cover_beats_fallback_on_pack_count() {
        // 12 is hit exactly by 3+3+3+3, the last exact combination visited,
        // and by 2+10, which needs half the packs.
        assert_eq!(plan_for(&[2, 3, 10], 12), vec![(2, 1), (10, 1)]);
    }

    #[test]
    fn every_plan_key_is_from_the_catalogue() {
        let catalogue = [23, 37, 45, 100, 500];
        for target in [1, 22, 24, 60, 99, 101, 480, 501] {
            for (size, count) in plan_for(&catalogue, target) {
                assert!(catalogue.contains(&(size as i64)));
                assert!(count > 0);
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Minimum total >= target and, at that total, the minimum pack count,
        /// via unbounded-knapsack dynamic programming.
        fn oracle(sizes: &[u64], target: u64) -> (u64, u64) {
            let max = *sizes.iter().max().unwrap();
            let bound = (target + max) as usize;
            let mut fewest = vec![u64::MAX; bound + 1];
            fewest[0] = 0;
            for t in 1..=bound {
                for &s in sizes {
                    let s = s as usize;
                    if s <= t && fewest[t - s] != u64::MAX {
                        fewest[t] = fewest[t].min(fewest[t - s] + 1);
                    }
                }
            }
            (target as usize..=bound)
                .find(|&t| fewest[t] != u64::MAX)
                .map(|t| (t as u64, fewest[t]))
                .unwrap()
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(128))]

            /// The plan ships the minimum achievable total, then the fewest packs.
            #[test]
            fn plan_is_optimal(
                raw in prop::collection::btree_set(3i64..=40, 1..=4),
                target in 1i64..=120,
            ) {
                let raw: Vec<i64> = raw.into_iter().collect();
                let catalogue = sizes(&raw);
                let plan = find_plan(&catalogue, OrderQuantity::new(target).unwrap());

                let unsigned: Vec<u64> = raw.iter().map(|&s| s as u64).collect();
                let (best_total, best_packs) = oracle(&unsigned, target as u64);

                prop_assert_eq!(plan.total_items(), best_total);
                prop_assert_eq!(plan.pack_count(), best_packs);
                for (size, count) in plan.iter() {
                    prop_assert!(catalogue.contains(&size));
                    prop_assert!(count > 0);
                }
            }
        }
    }
}
