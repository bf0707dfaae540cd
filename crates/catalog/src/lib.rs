//! Product catalog domain module.
//!
//! Owns the Product entity, its field-level validation, and the catalog
//! store/service pair. Knows nothing about orders; the sales side depends on
//! this crate for referential checks, never the other way around.

pub mod product;
pub mod service;

pub use product::{NewProduct, Product};
pub use service::{CatalogService, CatalogStore};
