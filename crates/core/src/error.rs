//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the catalog domain and service layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level typed failure.
///
/// Only the service boundary produces these. Storage reports absence as an
/// empty result, never as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A product failed one of its entity invariants on create/update.
    #[error("invalid product: {0}")]
    InvalidProduct(String),

    /// The referenced id does not belong to any live product.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A stock decrease asked for more than is on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// A stock adjustment amount was negative (or would overflow the stock counter).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The store has no identifiers left to hand out.
    #[error("product id sequence exhausted")]
    IdSequenceExhausted,
}

impl CatalogError {
    pub fn invalid_product(msg: impl Into<String>) -> Self {
        Self::InvalidProduct(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity(quantity)
    }

    /// Short, stable name of the failure kind (useful as a log field).
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::InvalidProduct(_) => "invalid_product",
            CatalogError::NotFound(_) => "not_found",
            CatalogError::InsufficientStock { .. } => "insufficient_stock",
            CatalogError::InvalidQuantity(_) => "invalid_quantity",
            CatalogError::IdSequenceExhausted => "id_sequence_exhausted",
        }
    }
}
