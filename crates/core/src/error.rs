//! Domain error model.

use thiserror::Error;

use crate::id::{OrderId, ProductId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Malformed payloads
/// and other transport concerns belong to the HTTP adapter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Caller-supplied data violates an invariant. Always recoverable by the
    /// caller; surfaced as a client-input error.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced Product identity does not exist.
    #[error("product with id {0} not found")]
    ProductNotFound(ProductId),

    /// A referenced Order identity does not exist.
    #[error("order with id {0} not found")]
    OrderNotFound(OrderId),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
