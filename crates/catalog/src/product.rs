//! Product entity and validation.

use serde::Deserialize;

use storefront_core::{DomainError, DomainResult, Persisted, ProductId};

/// Immutable catalog Product.
///
/// Once constructed it never changes: any update builds a new value carrying
/// the same identity, and the store replaces the prior entry. Construction
/// goes through [`NewProduct::into_product`], so every `Product` in the
/// system satisfies the field invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    price: f64,
    stock: i64,
}

impl Product {
    /// Identity, absent until the catalog store persists the product.
    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price, strictly positive.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Stock quantity, never negative.
    pub fn stock(&self) -> i64 {
        self.stock
    }
}

impl Persisted for Product {
    type Id = ProductId;

    fn id(&self) -> Option<ProductId> {
        self.id
    }

    fn with_id(self, id: ProductId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Raw product data as supplied by a caller, prior to validation.
///
/// Fields are optional because the adapter cannot guarantee their presence;
/// absence fails validation the same way an out-of-range value does.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl NewProduct {
    /// Validate and build a `Product` carrying the given identity.
    ///
    /// Guard clauses short-circuit in a fixed order: name, then price, then
    /// stock. The first failing check wins; results are never aggregated.
    pub fn into_product(self, id: Option<ProductId>) -> DomainResult<Product> {
        let name = match self.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(DomainError::validation("product name is required")),
        };

        let price = match self.price {
            Some(p) if p.is_finite() && p > 0.0 => p,
            _ => {
                return Err(DomainError::validation(
                    "product price must be greater than zero",
                ));
            }
        };

        let stock = match self.stock {
            Some(s) if s >= 0 => s,
            _ => {
                return Err(DomainError::validation(
                    "product stock cannot be negative",
                ));
            }
        };

        Ok(Product {
            id,
            name,
            price,
            stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64, stock: i64) -> NewProduct {
        NewProduct {
            name: Some(name.to_string()),
            price: Some(price),
            stock: Some(stock),
        }
    }

    #[test]
    fn valid_draft_builds_product_without_id() {
        let product = draft("Keyboard", 49.9, 10).into_product(None).unwrap();

        assert_eq!(product.id(), None);
        assert_eq!(product.name(), "Keyboard");
        assert_eq!(product.price(), 49.9);
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = draft("   ", 10.0, 1).into_product(None).unwrap_err();
        assert_eq!(err, DomainError::validation("product name is required"));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = NewProduct {
            name: None,
            price: Some(10.0),
            stock: Some(1),
        }
        .into_product(None)
        .unwrap_err();
        assert_eq!(err, DomainError::validation("product name is required"));

        let err = NewProduct {
            name: Some("Keyboard".to_string()),
            price: None,
            stock: Some(1),
        }
        .into_product(None)
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("product price must be greater than zero")
        );

        let err = NewProduct {
            name: Some("Keyboard".to_string()),
            price: Some(10.0),
            stock: None,
        }
        .into_product(None)
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("product stock cannot be negative")
        );
    }

    #[test]
    fn name_error_wins_over_price_error() {
        // Both name and price are invalid; guard clauses must report the
        // name failure, not aggregate.
        let err = draft("", -5.0, -1).into_product(None).unwrap_err();
        assert_eq!(err, DomainError::validation("product name is required"));
    }

    #[test]
    fn price_boundaries() {
        let err = draft("Keyboard", 0.0, 0).into_product(None).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("product price must be greater than zero")
        );

        assert!(draft("Keyboard", 0.01, 0).into_product(None).is_ok());
    }

    #[test]
    fn stock_boundaries() {
        let err = draft("Keyboard", 10.0, -1).into_product(None).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("product stock cannot be negative")
        );

        assert!(draft("Keyboard", 10.0, 0).into_product(None).is_ok());
    }

    #[test]
    fn non_finite_price_is_rejected() {
        assert!(draft("Keyboard", f64::NAN, 0).into_product(None).is_err());
        assert!(draft("Keyboard", f64::INFINITY, 0).into_product(None).is_err());
    }

    #[test]
    fn with_id_keeps_all_other_fields() {
        let product = draft("Keyboard", 49.9, 10).into_product(None).unwrap();
        let persisted = product.clone().with_id(ProductId::new(7));

        assert_eq!(persisted.id(), Some(ProductId::new(7)));
        assert_eq!(persisted.name(), product.name());
        assert_eq!(persisted.price(), product.price());
        assert_eq!(persisted.stock(), product.stock());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any draft with a non-blank name, positive finite
            /// price and non-negative stock is accepted verbatim.
            #[test]
            fn valid_drafts_are_accepted(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                price in 0.01f64..1_000_000.0,
                stock in 0i64..1_000_000,
            ) {
                let product = draft(&name, price, stock).into_product(None).unwrap();
                prop_assert_eq!(product.name(), name.as_str());
                prop_assert_eq!(product.price(), price);
                prop_assert_eq!(product.stock(), stock);
            }

            /// Property: a non-positive price is always rejected, whatever
            /// the rest of the draft looks like.
            #[test]
            fn non_positive_price_is_always_rejected(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                price in -1_000_000.0f64..=0.0,
                stock in 0i64..1_000,
            ) {
                prop_assert!(draft(&name, price, stock).into_product(None).is_err());
            }

            /// Property: negative stock is always rejected.
            #[test]
            fn negative_stock_is_always_rejected(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                price in 0.01f64..1_000.0,
                stock in i64::MIN..0,
            ) {
                prop_assert!(draft(&name, price, stock).into_product(None).is_err());
            }
        }
    }
}
