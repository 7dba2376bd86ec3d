//! # packer-cli: CLI Tool for the Pack Planner
//!
//! ## Subcommands
//!
//! - `packer plan`: plan one order against a size list given on the
//!   command line, without a server.
//! - `packer serve`: run the HTTP API.
//!
//! ```bash
//! packer plan --sizes 250,500,1000,2000,5000 --items 12001
//! packer plan --sizes 250,500 --items 751 --strategy first-fit --json
//! packer serve --port 8282
//! ```

pub mod plan;
pub mod serve;
