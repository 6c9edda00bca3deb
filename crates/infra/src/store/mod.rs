//! Product storage abstractions.
//!
//! Stores are purely mechanical: no business validation, and absence is always
//! reported as `None`, an empty `Vec`, `false` or `0`, never as an error. The
//! only store failures concern the identifier sequence.

pub mod in_memory;

pub use in_memory::InMemoryProductStore;

use std::sync::Arc;

use thiserror::Error;

use catalog_core::{CatalogError, ProductId};
use catalog_products::Product;

/// Identifier-sequence failures raised by `ProductStore::save`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A caller-supplied id the sequence cannot move past (`u64::MAX` is reserved).
    #[error("product id {0} is out of range")]
    IdOutOfRange(ProductId),

    /// Every assignable id has been handed out.
    #[error("product id sequence exhausted")]
    IdSequenceExhausted,
}

impl From<StoreError> for CatalogError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::IdOutOfRange(id) => {
                CatalogError::invalid_product(format!("id {id} is out of range"))
            }
            StoreError::IdSequenceExhausted => CatalogError::IdSequenceExhausted,
        }
    }
}

/// Keyed product storage with an owned identifier sequence.
pub trait ProductStore: Send + Sync {
    /// Insert or overwrite a product.
    ///
    /// A product without an id gets the next id from the store's sequence
    /// (starting at 1, never reused after deletes). Returns the stored record.
    /// Nothing is written when an error is returned.
    fn save(&self, product: Product) -> Result<Product, StoreError>;
    /// Read-modify-write of one record under the store's write lock.
    ///
    /// `apply` edits a copy of the current record; the copy replaces the record
    /// only if `apply` returns `Ok`. Returns `None` when `id` is absent. The
    /// record keeps `id` whatever `apply` does to the id field.
    fn update<F, E>(&self, id: ProductId, apply: F) -> Option<Result<Product, E>>
    where
        F: FnOnce(&mut Product) -> Result<(), E>;
    fn find_by_id(&self, id: ProductId) -> Option<Product>;
    /// All live products. Callers must not rely on the order.
    fn find_all(&self) -> Vec<Product>;
    /// Case-insensitive exact match on category. A blank query matches nothing.
    fn find_by_category(&self, category: &str) -> Vec<Product>;
    /// Case-insensitive substring match on name. A blank query matches nothing.
    fn find_by_name_containing(&self, fragment: &str) -> Vec<Product>;
    /// Remove a product, returning whether it existed.
    fn delete_by_id(&self, id: ProductId) -> bool;
    fn exists_by_id(&self, id: ProductId) -> bool;
    fn count(&self) -> usize;
    /// Remove every product (reset/test support). The id sequence keeps going.
    fn delete_all(&self);
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore,
{
    fn save(&self, product: Product) -> Result<Product, StoreError> {
        (**self).save(product)
    }

    fn update<F, E>(&self, id: ProductId, apply: F) -> Option<Result<Product, E>>
    where
        F: FnOnce(&mut Product) -> Result<(), E>,
    {
        (**self).update(id, apply)
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Product> {
        (**self).find_all()
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        (**self).find_by_category(category)
    }

    fn find_by_name_containing(&self, fragment: &str) -> Vec<Product> {
        (**self).find_by_name_containing(fragment)
    }

    fn delete_by_id(&self, id: ProductId) -> bool {
        (**self).delete_by_id(id)
    }

    fn exists_by_id(&self, id: ProductId) -> bool {
        (**self).exists_by_id(id)
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn delete_all(&self) {
        (**self).delete_all()
    }
}
