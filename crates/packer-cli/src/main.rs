//! # packer CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use packer_cli::plan::{run_plan, PlanArgs};
use packer_cli::serve::{run_serve, ServeArgs};

/// Pack planner CLI.
///
/// Works out which packs to ship for an order: never fewer items than
/// ordered, as few surplus items as possible, then as few packs as possible.
#[derive(Parser, Debug)]
#[command(name = "packer", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan one order against the given pack sizes.
    Plan(PlanArgs),

    /// Run the HTTP API.
    Serve(ServeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The server logs its requests at info without any -v.
    let base = u8::from(matches!(cli.command, Commands::Serve(_)));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose.saturating_add(base) {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let json = std::env::var("PACKER_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    let result = match cli.command {
        Commands::Plan(args) => run_plan(&args),
        Commands::Serve(args) => run_serve(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use packer_optimizer::Strategy;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_plan() {
        let cli = Cli::try_parse_from([
            "packer", "-v", "plan", "--sizes", "250,500", "--items", "751", "--strategy",
            "first-fit", "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.sizes, vec![250, 500]);
                assert_eq!(args.items, 751);
                assert_eq!(args.strategy, Strategy::FirstFit);
                assert!(args.json);
            }
            other => panic!("expected plan, got {other:?}"),
        }
    }

    #[test]
    fn plan_requires_sizes() {
        assert!(Cli::try_parse_from(["packer", "plan", "--items", "10"]).is_err());
    }

    #[test]
    fn plan_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from([
            "packer", "plan", "--sizes", "250", "--items", "10", "--strategy", "random",
        ])
        .is_err());
    }
}
