//! # Registry Errors

use packer_core::ValidationError;
use thiserror::Error;

/// Failure of a registry mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The batch contained a size that failed validation.
    #[error("invalid pack size: {0}")]
    InvalidSize(#[from] ValidationError),

    /// The size to remove is not registered.
    #[error("pack size {0} not found")]
    NotFound(i64),
}
