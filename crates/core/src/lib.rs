//! `storefront-core` — shared domain foundation.
//!
//! This crate contains the primitives both the catalog and the sales side
//! build on: typed identifiers, the domain error taxonomy, and the generic
//! identity-assigning in-memory store.

pub mod error;
pub mod id;
pub mod store;

pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId};
pub use store::{MemoryStore, Persisted};
