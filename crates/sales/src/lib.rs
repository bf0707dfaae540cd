//! Orders domain module.
//!
//! Owns the Order aggregate (line items included) and the validation &
//! composition engine that checks every order against the product catalog
//! before anything is persisted.

pub mod order;
pub mod service;

pub use order::{LineItem, NewLineItem, NewOrder, Order};
pub use service::{OrderService, OrderStore};
