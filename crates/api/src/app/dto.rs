use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_catalog::Product;
use storefront_sales::{LineItem, Order};

// Request payloads deserialize directly into the domain draft types
// (`NewProduct`, `NewOrder`); only responses need DTOs here.

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Option<u64>,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().map(Into::into),
            name: product.name().to_string(),
            price: product.price(),
            stock: product.stock(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LineItemResponse {
    pub product: ProductResponse,
    pub quantity: i64,
    pub subtotal: f64,
}

impl From<&LineItem> for LineItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            product: ProductResponse::from(item.product()),
            quantity: item.quantity(),
            subtotal: item.subtotal(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Option<u64>,
    pub customer: String,
    pub items: Vec<LineItemResponse>,
    pub created_at: DateTime<Utc>,
    pub total: f64,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().map(Into::into),
            customer: order.customer().to_string(),
            items: order.items().iter().map(LineItemResponse::from).collect(),
            created_at: order.created_at(),
            total: order.total(),
        }
    }
}
