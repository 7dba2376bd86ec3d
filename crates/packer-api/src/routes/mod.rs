//! # API Route Modules
//!
//! - `order`: order planning against the current pack size catalogue.
//! - `packs`: pack size registry management (add, remove, clear, list).

pub mod order;
pub mod packs;
