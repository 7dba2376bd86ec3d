//! # packer-registry: Pack Size Registry
//!
//! Holds the catalogue of pack sizes the optimizer draws from. The
//! catalogue is the only state shared across requests.
//!
//! ## Concurrency
//!
//! [`PackRegistry`] keeps its sizes behind a single `parking_lot::RwLock`.
//! Every operation takes the lock once, so a reader never sees half of a
//! batch insert. The lock is never held across an `.await`.

pub mod error;
pub mod memory;

pub use error::RegistryError;
pub use memory::PackRegistry;

use packer_core::PackSize;

/// Storage seam for the pack size catalogue.
pub trait PackStore: Send + Sync {
    /// Validate and insert a batch, skipping sizes already present.
    ///
    /// Any non-positive entry rejects the whole batch and leaves the store
    /// unchanged. Returns the number of sizes actually added; a batch made
    /// only of duplicates succeeds with zero.
    fn add_sizes(&self, sizes: &[i64]) -> Result<usize, RegistryError>;

    /// Remove one size. Fails with [`RegistryError::NotFound`] when absent.
    fn remove_size(&self, size: i64) -> Result<(), RegistryError>;

    /// Remove every size.
    fn remove_all(&self);

    /// Snapshot of the current sizes, in insertion order.
    fn list_sizes(&self) -> Vec<PackSize>;
}
