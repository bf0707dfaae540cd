//! Catalog service: validated CRUD over the product store.

use std::sync::Arc;

use storefront_core::{DomainError, DomainResult, MemoryStore, ProductId};

use crate::product::{NewProduct, Product};

/// Identity-assigning store for Products. Pure storage; validation lives in
/// [`CatalogService`].
pub type CatalogStore = MemoryStore<Product>;

/// Validates product data and persists it through the catalog store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new product, returning it with its identity.
    pub fn create(&self, new: NewProduct) -> DomainResult<Product> {
        let product = new.into_product(None)?;
        let persisted = self.store.save(product);
        tracing::info!(id = ?persisted.id(), name = persisted.name(), "product created");
        Ok(persisted)
    }

    pub fn find_all(&self) -> Vec<Product> {
        self.store.find_all()
    }

    pub fn find(&self, id: ProductId) -> DomainResult<Product> {
        self.store
            .find_by_id(id)
            .ok_or(DomainError::ProductNotFound(id))
    }

    /// Replace the product at `id` with a freshly validated value.
    ///
    /// The candidate is fully formed (identity included) before validation
    /// runs; partial updates are not supported, the caller supplies every
    /// field.
    pub fn update(&self, id: ProductId, new: NewProduct) -> DomainResult<Product> {
        self.find(id)?;
        let candidate = new.into_product(Some(id))?;
        Ok(self.store.save(candidate))
    }

    pub fn delete(&self, id: ProductId) -> DomainResult<()> {
        if self.store.delete(id) {
            tracing::info!(%id, "product deleted");
            Ok(())
        } else {
            Err(DomainError::ProductNotFound(id))
        }
    }

    /// Clear the catalog and reset identity assignment. Test-environment
    /// cleanup; gate or remove in a hardened deployment.
    pub fn delete_all(&self) {
        self.store.delete_all();
        tracing::warn!("catalog store cleared");
    }
}
