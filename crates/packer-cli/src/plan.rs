//! # Plan Subcommand
//!
//! Plans a single order offline and prints the result as a table or as
//! the same JSON object `GET /order/{items}` returns.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use packer_api::service::OrderService;
use packer_core::{OrderQuantity, PackPlan};
use packer_optimizer::Strategy;
use packer_registry::PackRegistry;

/// Arguments for the `packer plan` subcommand.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Comma-separated pack sizes, e.g. `250,500,1000`.
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub sizes: Vec<i64>,

    /// Number of items ordered.
    #[arg(long, allow_hyphen_values = true)]
    pub items: i64,

    /// Packing strategy.
    #[arg(long, default_value_t = Strategy::BestFit)]
    pub strategy: Strategy,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the plan subcommand.
pub fn run_plan(args: &PlanArgs) -> Result<u8> {
    let output = plan_output(args)?;
    println!("{output}");
    Ok(0)
}

/// Compute the plan and render it in the requested format.
pub fn plan_output(args: &PlanArgs) -> Result<String> {
    let registry = PackRegistry::with_sizes(&args.sizes).context("invalid pack sizes")?;
    let service = OrderService::new(Arc::new(registry), args.strategy);
    let plan = service
        .compute_order(args.items)
        .with_context(|| format!("cannot plan an order of {} items", args.items))?;

    if args.json {
        return serde_json::to_string(&plan).context("failed to serialize plan");
    }

    let quantity = OrderQuantity::new(args.items)?;
    Ok(render_table(&plan, quantity))
}

/// Human-readable plan: one line per size, largest first, then a summary.
pub fn render_table(plan: &PackPlan, quantity: OrderQuantity) -> String {
    let mut rows: Vec<(u64, u64)> = plan.iter().map(|(size, n)| (size.get(), n)).collect();
    rows.reverse();

    let width = rows
        .iter()
        .map(|(size, _)| size.to_string().len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = rows
        .iter()
        .map(|(size, count)| format!("{size:>width$} x {count}"))
        .collect();

    lines.push(format!(
        "total {} items in {} packs (surplus {})",
        plan.total_items(),
        plan.pack_count(),
        plan.surplus(quantity)
    ));
    lines.join("\n")
}
