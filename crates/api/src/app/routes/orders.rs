use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use storefront_core::OrderId;
use storefront_sales::NewOrder;

use crate::app::routes::list_response;
use crate::app::{dto, errors, AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        // Literal route must be registered so it is not captured by `/:id`.
        .route("/deleteall", delete(delete_all_orders))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
}

async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewOrder>,
) -> axum::response::Response {
    match services.orders.create(body) {
        Ok(order) => {
            (StatusCode::CREATED, Json(dto::OrderResponse::from(&order))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn list_orders(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    list_response(services.orders.find_all().iter().map(dto::OrderResponse::from))
}

async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.orders.find(OrderId::new(id)) {
        Ok(order) => Json(dto::OrderResponse::from(&order)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn update_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
    Json(body): Json<NewOrder>,
) -> axum::response::Response {
    match services.orders.update(OrderId::new(id), body) {
        Ok(order) => Json(dto::OrderResponse::from(&order)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.orders.delete(OrderId::new(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_all_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    services.orders.delete_all();
    Json(serde_json::json!({ "message": "order store cleared" })).into_response()
}
