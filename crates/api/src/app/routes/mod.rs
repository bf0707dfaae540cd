use axum::{response::IntoResponse, Json};
use serde::Serialize;

pub mod orders;
pub mod products;

pub(crate) fn list_response<T: Serialize>(
    items: impl Iterator<Item = T>,
) -> axum::response::Response {
    Json(items.collect::<Vec<_>>()).into_response()
}
