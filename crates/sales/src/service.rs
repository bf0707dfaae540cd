//! Order validation & composition engine.
//!
//! Couples the otherwise independent catalog and order stores: every order
//! is checked against the catalog before it is persisted, and each accepted
//! line item embeds the catalog's product value at that moment.

use std::sync::Arc;

use chrono::Utc;

use storefront_catalog::CatalogStore;
use storefront_core::{DomainError, DomainResult, MemoryStore, OrderId};

use crate::order::{LineItem, NewLineItem, NewOrder, Order};

/// Identity-assigning store for Orders. Treats the embedded line items as
/// opaque payload.
pub type OrderStore = MemoryStore<Order>;

/// Validates, assembles and persists orders.
///
/// Stores are injected explicitly; there is no ambient global. Note that no
/// lock spans the catalog read and the order write, so a product can be
/// deleted between validation and persistence (accepted race, see DESIGN.md).
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<OrderStore>,
    catalog: Arc<CatalogStore>,
}

impl OrderService {
    pub fn new(orders: Arc<OrderStore>, catalog: Arc<CatalogStore>) -> Self {
        Self { orders, catalog }
    }

    /// Validate and persist a new order.
    ///
    /// Checks short-circuit in a fixed sequence: customer name, then
    /// presence of line items, then each item in input order (product
    /// reference, catalog existence, quantity). The first failure is
    /// returned immediately and nothing is written.
    pub fn create(&self, new: NewOrder) -> DomainResult<Order> {
        let (customer, items) = self.validated_parts(new)?;

        let order = Order {
            id: None,
            customer,
            items,
            created_at: Utc::now(),
        };
        let persisted = self.orders.save(order);
        tracing::info!(
            id = ?persisted.id(),
            customer = persisted.customer(),
            total = persisted.total(),
            "order created"
        );
        Ok(persisted)
    }

    pub fn find_all(&self) -> Vec<Order> {
        self.orders.find_all()
    }

    pub fn find(&self, id: OrderId) -> DomainResult<Order> {
        self.orders
            .find_by_id(id)
            .ok_or(DomainError::OrderNotFound(id))
    }

    /// Replace an existing order's customer and its **entire** line-item
    /// sequence, then re-validate from scratch.
    ///
    /// The previous items are discarded, not merged. The creation timestamp
    /// survives the replacement.
    pub fn update(&self, id: OrderId, new: NewOrder) -> DomainResult<Order> {
        let existing = self.find(id)?;
        let (customer, items) = self.validated_parts(new)?;

        let updated = Order {
            id: Some(id),
            customer,
            items,
            created_at: existing.created_at(),
        };
        Ok(self.orders.save(updated))
    }

    pub fn delete(&self, id: OrderId) -> DomainResult<()> {
        if self.orders.delete(id) {
            tracing::info!(%id, "order deleted");
            Ok(())
        } else {
            Err(DomainError::OrderNotFound(id))
        }
    }

    /// Clear all orders and reset identity assignment. Test-environment
    /// cleanup; gate or remove in a hardened deployment.
    pub fn delete_all(&self) {
        self.orders.delete_all();
        tracing::warn!("order store cleared");
    }

    /// Run the full order validation sequence, resolving each line item's
    /// product reference to a catalog snapshot.
    fn validated_parts(&self, new: NewOrder) -> DomainResult<(String, Vec<LineItem>)> {
        let customer = match new.customer {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err(DomainError::validation("customer name is required")),
        };

        if new.items.is_empty() {
            return Err(DomainError::validation(
                "order must contain at least one line item",
            ));
        }

        let mut items = Vec::with_capacity(new.items.len());
        for item in new.items {
            items.push(self.resolve_item(item)?);
        }

        Ok((customer, items))
    }

    fn resolve_item(&self, item: NewLineItem) -> DomainResult<LineItem> {
        let product_id = item.product_id.ok_or_else(|| {
            DomainError::validation("line item is missing a product reference")
        })?;

        // Snapshot capture: the catalog's current value becomes part of the
        // order and is never refreshed afterwards.
        let product = self.catalog.find_by_id(product_id).ok_or_else(|| {
            DomainError::validation(format!("product with id {product_id} does not exist"))
        })?;

        let quantity = match item.quantity {
            Some(q) if q > 0 => q,
            _ => {
                return Err(DomainError::validation(
                    "line item quantity must be greater than zero",
                ));
            }
        };

        LineItem::new(product, quantity)
    }
}
