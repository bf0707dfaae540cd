//! Order aggregate: customer, line items, derived total.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use storefront_catalog::Product;
use storefront_core::{DomainError, DomainResult, OrderId, Persisted, ProductId};

/// One line of an order: a Product snapshot plus a quantity.
///
/// The product is captured **by value** at order-validation time. Later
/// catalog changes (price updates, even deletion) never reach back into an
/// existing order; its totals are frozen at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product: Product,
    quantity: i64,
}

impl LineItem {
    /// Build a line item from a persisted product snapshot.
    ///
    /// The product must already carry an identity and the quantity must be
    /// strictly positive.
    pub fn new(product: Product, quantity: i64) -> DomainResult<Self> {
        if product.id().is_none() {
            return Err(DomainError::validation(
                "line item product must have an identity",
            ));
        }
        if quantity <= 0 {
            return Err(DomainError::validation(
                "line item quantity must be greater than zero",
            ));
        }
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Computed, never stored.
    pub fn subtotal(&self) -> f64 {
        self.product.price() * self.quantity as f64
    }
}

/// Order aggregate root. Owns its line items exclusively; they have no store
/// of their own.
#[derive(Debug, Clone)]
pub struct Order {
    pub(crate) id: Option<OrderId>,
    pub(crate) customer: String,
    pub(crate) items: Vec<LineItem>,
    pub(crate) created_at: DateTime<Utc>,
}

impl Order {
    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sum of all line-item subtotals. Always derived, never cached.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

/// Two orders with the same identity are the same order, whatever their
/// other fields say. This is what the store's replace-on-save keys on.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Persisted for Order {
    type Id = OrderId;

    fn id(&self) -> Option<OrderId> {
        self.id
    }

    fn with_id(self, id: OrderId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Raw line-item data as supplied by a caller: a product reference and a
/// quantity, both unchecked.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLineItem {
    pub product_id: Option<ProductId>,
    pub quantity: Option<i64>,
}

/// Raw order data as supplied by a caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub customer: Option<String>,
    #[serde(default)]
    pub items: Vec<NewLineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::NewProduct;

    fn product(id: u64, price: f64) -> Product {
        NewProduct {
            name: Some(format!("product-{id}")),
            price: Some(price),
            stock: Some(10),
        }
        .into_product(Some(ProductId::new(id)))
        .unwrap()
    }

    fn order(id: Option<u64>, customer: &str, items: Vec<LineItem>) -> Order {
        Order {
            id: id.map(OrderId::new),
            customer: customer.to_string(),
            items,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn subtotal_is_price_times_quantity() {
        let item = LineItem::new(product(1, 10.0), 5).unwrap();
        assert_eq!(item.subtotal(), 50.0);
    }

    #[test]
    fn line_item_rejects_non_positive_quantity() {
        assert!(LineItem::new(product(1, 10.0), 0).is_err());
        assert!(LineItem::new(product(1, 10.0), -3).is_err());
    }

    #[test]
    fn line_item_rejects_unpersisted_product() {
        let transient = NewProduct {
            name: Some("draft".to_string()),
            price: Some(1.0),
            stock: Some(0),
        }
        .into_product(None)
        .unwrap();

        assert!(LineItem::new(transient, 1).is_err());
    }

    #[test]
    fn total_sums_all_subtotals() {
        let items = vec![
            LineItem::new(product(1, 10.0), 2).unwrap(),
            LineItem::new(product(2, 3.5), 4).unwrap(),
        ];
        let order = order(None, "Alice", items);

        assert_eq!(order.total(), 34.0);
    }

    #[test]
    fn total_of_empty_order_is_zero() {
        assert_eq!(order(None, "Alice", vec![]).total(), 0.0);
    }

    #[test]
    fn equality_is_by_identity_alone() {
        let item = LineItem::new(product(1, 10.0), 1).unwrap();
        let a = order(Some(1), "Alice", vec![item.clone()]);
        let b = order(Some(1), "Bob", vec![]);
        let c = order(Some(2), "Alice", vec![item]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
