//! # packer-core: Foundational Types for the Packer Stack
//!
//! Defines the domain primitives shared by every other crate in the
//! workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtypes.** `PackSize` and `OrderQuantity` can only be
//!    constructed from positive integers. Raw `i64` values coming off the
//!    wire are checked once, at the boundary, and never again.
//!
//! 2. **`PackPlan` owns its invariant.** A plan never stores a zero count.
//!    Every mutation path goes through [`PackPlan::add`] or
//!    [`PackPlan::take`], which keep the map clean.
//!
//! ## Crate Policy
//!
//! - No I/O, no async, no logging.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod pack;
pub mod plan;

pub use error::ValidationError;
pub use pack::{OrderQuantity, PackSize};
pub use plan::PackPlan;
