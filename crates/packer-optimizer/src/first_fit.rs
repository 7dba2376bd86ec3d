//! # First-Fit Strategy
//!
//! Greedy allocation: walk sizes from largest to smallest, take as many of
//! each as fit in what is left of the order, and cover any remainder with
//! one extra smallest pack. Cheap (one division per size) but it can ship
//! more packs than necessary, e.g. `2 x 500` where one `1000` would do.

use packer_core::{OrderQuantity, PackPlan, PackSize};

/// Compute a greedy plan for `target` items.
pub fn first_fit(sizes: &[PackSize], target: OrderQuantity) -> PackPlan {
    let mut descending = sizes.to_vec();
    descending.sort_unstable_by(|a, b| b.cmp(a));
    descending.dedup();

    let mut plan = PackPlan::new();
    let Some(&smallest) = descending.last() else {
        return plan;
    };

    let mut remaining = target.get();
    for &size in &descending {
        if remaining >= size.get() {
            plan.add(size, remaining / size.get());
            remaining %= size.get();
        }
    }

    if remaining > 0 {
        plan.add(smallest, 1);

        // Several smallest packs may add up to exactly one available size.
        let count = plan.count(smallest);
        if count > 1 {
            let combined = smallest.get().saturating_mul(count);
            if let Some(&merged) = descending.iter().find(|s| s.get() == combined) {
                plan.take(smallest, count);
                plan.add(merged, 1);
            }
        }
    }

    tracing::debug!(
        target = target.get(),
        total = plan.total_items(),
        packs = plan.pack_count(),
        "first-fit plan"
    );

    plan
}
