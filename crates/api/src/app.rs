use std::sync::Arc;

use axum::{extract::Extension, Router};

use storefront_catalog::{CatalogService, CatalogStore};
use storefront_sales::{OrderService, OrderStore};

pub mod dto;
pub mod errors;
pub mod routes;

/// Constructed services shared by all handlers.
///
/// Stores are built once here and passed into the services explicitly; the
/// order service gets a handle on the catalog store for its referential
/// checks. No globals.
pub struct AppServices {
    pub catalog: CatalogService,
    pub orders: OrderService,
}

impl AppServices {
    pub fn new() -> Self {
        let catalog_store = Arc::new(CatalogStore::new());
        let order_store = Arc::new(OrderStore::new());

        Self {
            catalog: CatalogService::new(catalog_store.clone()),
            orders: OrderService::new(order_store, catalog_store),
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router with freshly constructed in-memory state.
pub fn build_app() -> Router {
    let services = Arc::new(AppServices::new());

    Router::new()
        .nest("/api/products", routes::products::router())
        .nest("/api/orders", routes::orders::router())
        .layer(Extension(services))
}
