//! # In-Memory Registry
//!
//! `Vec`-backed store preserving insertion order. Clones share the same
//! underlying storage, so one registry can be handed to every handler.

use std::sync::Arc;

use packer_core::PackSize;
use parking_lot::RwLock;

use crate::error::RegistryError;
use crate::PackStore;

/// Thread-safe, cloneable pack size catalogue.
#[derive(Debug, Clone, Default)]
pub struct PackRegistry {
    sizes: Arc<RwLock<Vec<PackSize>>>,
}

impl PackRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with `sizes`, validated like [`PackStore::add_sizes`].
    pub fn with_sizes(sizes: &[i64]) -> Result<Self, RegistryError> {
        let registry = Self::new();
        registry.add_sizes(sizes)?;
        Ok(registry)
    }

    /// Number of registered sizes.
    pub fn len(&self) -> usize {
        self.sizes.read().len()
    }

    /// Whether no sizes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PackStore for PackRegistry {
    fn add_sizes(&self, sizes: &[i64]) -> Result<usize, RegistryError> {
        let batch = PackSize::parse_batch(sizes)?;

        let mut guard = self.sizes.write();
        let before = guard.len();
        for size in batch {
            if !guard.contains(&size) {
                guard.push(size);
            }
        }
        let added = guard.len() - before;
        drop(guard);

        tracing::debug!(requested = sizes.len(), added, "pack sizes added");
        Ok(added)
    }

    fn remove_size(&self, size: i64) -> Result<(), RegistryError> {
        let mut guard = self.sizes.write();
        let position = guard
            .iter()
            .position(|s| i64::try_from(s.get()).is_ok_and(|v| v == size))
            .ok_or(RegistryError::NotFound(size))?;
        guard.remove(position);
        Ok(())
    }

    fn remove_all(&self) {
        self.sizes.write().clear();
    }

    fn list_sizes(&self) -> Vec<PackSize> {
        self.sizes.read().clone()
    }
}
