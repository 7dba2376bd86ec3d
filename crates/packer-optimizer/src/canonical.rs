//! # Canonical Pack Merging
//!
//! Rewrites runs of a smaller pack into a larger available pack whenever
//! the larger size is an exact multiple of the smaller one. Total items
//! shipped never change; only the number of physical packs shrinks.
//!
//! ## Pass Structure
//!
//! Sizes are sorted descending and every `(larger, smaller)` pair with
//! `larger % smaller == 0` is visited in that order. For each pair,
//! `plan[smaller] / ratio` groups are merged (truncating: a leftover below
//! one full group stays as smaller packs). If a merge leaves more than one
//! pack of the larger size, that surplus may merge further up, so the pass
//! starts over from the top.
//!
//! ## Termination
//!
//! Each merge replaces `ratio >= 2` packs with one, strictly lowering the
//! plan's pack count. A pass that merges nothing does not restart.

use packer_core::{PackPlan, PackSize};

/// Merge smaller packs into larger exact multiples drawn from `sizes`.
pub fn canonicalize(mut plan: PackPlan, sizes: &[PackSize]) -> PackPlan {
    let mut descending = sizes.to_vec();
    descending.sort_unstable_by(|a, b| b.cmp(a));
    descending.dedup();

    let mut passes = 1u32;
    while merge_pass(&mut plan, &descending) {
        passes += 1;
    }

    tracing::trace!(passes, packs = plan.pack_count(), "canonicalized plan");
    plan
}

/// Run one sweep over all pairs. Returns `true` when a merge left more than
/// one pack of the larger size and the sweep must start over.
fn merge_pass(plan: &mut PackPlan, descending: &[PackSize]) -> bool {
    for (i, &larger) in descending.iter().enumerate() {
        for &smaller in &descending[i + 1..] {
            if larger.get() % smaller.get() != 0 {
                continue;
            }

            let ratio = larger.get() / smaller.get();
            let convertible = plan.count(smaller) / ratio;
            if convertible == 0 {
                continue;
            }

            plan.add(larger, convertible);
            plan.take(smaller, convertible * ratio);

            if plan.count(larger) > 1 {
                return true;
            }
        }
    }
    false
}
