use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use storefront_catalog::NewProduct;
use storefront_core::ProductId;

use crate::app::routes::list_response;
use crate::app::{dto, errors, AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        // Literal route must be registered so it is not captured by `/:id`.
        .route("/deleteall", delete(delete_all_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewProduct>,
) -> axum::response::Response {
    match services.catalog.create(body) {
        Ok(product) => (
            StatusCode::CREATED,
            Json(dto::ProductResponse::from(&product)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    list_response(services.catalog.find_all().iter().map(dto::ProductResponse::from))
}

async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.catalog.find(ProductId::new(id)) {
        Ok(product) => Json(dto::ProductResponse::from(&product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
    Json(body): Json<NewProduct>,
) -> axum::response::Response {
    match services.catalog.update(ProductId::new(id), body) {
        Ok(product) => Json(dto::ProductResponse::from(&product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.catalog.delete(ProductId::new(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_all_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    services.catalog.delete_all();
    Json(serde_json::json!({ "message": "product store cleared" })).into_response()
}
