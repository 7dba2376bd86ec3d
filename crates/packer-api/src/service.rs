//! # Order Service
//!
//! Orchestrates one order: validate the quantity, snapshot the registry,
//! run the configured strategy. Read-only against the registry; the
//! snapshot is taken once, so a concurrent registry change cannot tear
//! the catalogue mid-search.

use std::sync::Arc;

use packer_core::{OrderQuantity, PackPlan, ValidationError};
use packer_optimizer::Strategy;
use packer_registry::PackStore;
use thiserror::Error;

/// Why an order could not be planned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The requested quantity is not a positive integer.
    #[error("invalid order quantity: {0}")]
    InvalidQuantity(#[from] ValidationError),

    /// No pack sizes are registered.
    #[error("no pack sizes configured")]
    EmptyCatalogue,
}

/// Computes order plans against the shared registry.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn PackStore>,
    strategy: Strategy,
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl OrderService {
    /// Create a service reading sizes from `store`.
    pub fn new(store: Arc<dyn PackStore>, strategy: Strategy) -> Self {
        Self { store, strategy }
    }

    /// The strategy used for every order.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Plan an order for `quantity` items.
    pub fn compute_order(&self, quantity: i64) -> Result<PackPlan, OrderError> {
        let quantity = OrderQuantity::new(quantity)?;

        let sizes = self.store.list_sizes();
        if sizes.is_empty() {
            return Err(OrderError::EmptyCatalogue);
        }

        let plan = self.strategy.plan(&sizes, quantity);

        tracing::info!(
            quantity = quantity.get(),
            strategy = %self.strategy,
            total = plan.total_items(),
            surplus = plan.surplus(quantity),
            packs = plan.pack_count(),
            "order planned"
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packer_core::PackSize;
    use packer_registry::{PackRegistry, RegistryError};

    fn service(sizes: &[i64], strategy: Strategy) -> OrderService {
        let registry = PackRegistry::with_sizes(sizes).unwrap();
        OrderService::new(Arc::new(registry), strategy)
    }

    /// Store stub with a fixed catalogue.
    struct FixedStore(Vec<PackSize>);

    impl PackStore for FixedStore {
        fn add_sizes(&self, _sizes: &[i64]) -> Result<usize, RegistryError> {
            Ok(0)
        }
        fn remove_size(&self, size: i64) -> Result<(), RegistryError> {
            Err(RegistryError::NotFound(size))
        }
        fn remove_all(&self) {}
        fn list_sizes(&self) -> Vec<PackSize> {
            self.0.clone()
        }
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let svc = service(&[250], Strategy::BestFit);
        assert_eq!(
            svc.compute_order(0),
            Err(OrderError::InvalidQuantity(
                ValidationError::NonPositiveQuantity(0)
            ))
        );
        assert!(matches!(
            svc.compute_order(-1),
            Err(OrderError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn rejects_empty_catalogue() {
        let svc = service(&[], Strategy::BestFit);
        assert_eq!(svc.compute_order(10), Err(OrderError::EmptyCatalogue));
    }

    #[test]
    fn quantity_is_checked_before_catalogue() {
        let svc = service(&[], Strategy::BestFit);
        assert!(matches!(
            svc.compute_order(0),
            Err(OrderError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn delegates_to_strategy() {
        let best = service(&[250, 500, 1000, 2000, 5000], Strategy::BestFit);
        let plan = best.compute_order(751).unwrap();
        assert_eq!(plan.count(PackSize::new(1000).unwrap()), 1);
        assert_eq!(plan.pack_count(), 1);

        let first = service(&[250, 500, 1000, 2000, 5000], Strategy::FirstFit);
        let plan = first.compute_order(751).unwrap();
        assert_eq!(plan.count(PackSize::new(500).unwrap()), 2);
    }

    #[test]
    fn works_against_any_store() {
        let store = FixedStore(PackSize::parse_batch(&[23, 37, 45, 100, 500]).unwrap());
        let svc = OrderService::new(Arc::new(store), Strategy::BestFit);
        let plan = svc.compute_order(46).unwrap();
        assert_eq!(plan.count(PackSize::new(23).unwrap()), 2);
        assert_eq!(plan.len(), 1);
    }
}
