//! Catalog service (application-level orchestration over a `ProductStore`).
//!
//! The service is the only place where product invariants turn into typed
//! failures. Every mutating operation follows the same shape:
//!
//! ```text
//! request
//!   ↓
//! 1. Look up the current record (NotFound if absent, where relevant)
//!   ↓
//! 2. Validate or apply the entity rule in memory (InvalidProduct, InvalidQuantity, ...)
//!   ↓
//! 3. Stamp timestamps from the injected clock
//!   ↓
//! 4. Write the record back through the store
//! ```
//!
//! All checks run before step 4, so a rejected request never leaves a partial
//! write behind.
//!
//! ## Concurrency
//!
//! Updates and stock adjustments are read-modify-write sequences. Steps 1 to 4
//! run inside `ProductStore::update`, under the store's own write lock, so any
//! number of services sharing one store cannot lose updates or resurrect a
//! deleted record. Creates and deletes are single store calls.

use chrono::{DateTime, Utc};

use catalog_core::{CatalogError, CatalogResult, Clock, ProductId, SystemClock};
use catalog_products::{Product, validate_product};

use crate::store::ProductStore;

/// Validated CRUD and stock management over a product store.
///
/// ## Generic Parameters
///
/// - `S`: Store implementation (`InMemoryProductStore` or an `Arc` of one)
/// - `C`: Time source used for `created_at` / `updated_at`
#[derive(Debug)]
pub struct CatalogService<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S> CatalogService<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S, C> CatalogService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S, C> CatalogService<S, C>
where
    S: ProductStore,
    C: Clock,
{
    /// Validate and persist a new product.
    ///
    /// Stamps `created_at` and `updated_at` with the current time. The store
    /// assigns an id only if the product does not already carry one; a
    /// caller-supplied `u64::MAX` is rejected as `InvalidProduct`.
    #[tracing::instrument(skip(self, product), fields(name = %product.name))]
    pub fn create_product(&self, mut product: Product) -> CatalogResult<Product> {
        validate_product(&product).inspect_err(log_rejection)?;

        let now = self.clock.now();
        product.created_at = now;
        product.updated_at = now;

        let saved = self
            .store
            .save(product)
            .map_err(CatalogError::from)
            .inspect_err(log_rejection)?;
        tracing::debug!(product_id = ?saved.id, "product created");
        Ok(saved)
    }

    /// Replace the product stored under `id` with `new_data`.
    ///
    /// `id` is authoritative: any id carried by `new_data` is overwritten. The
    /// original `created_at` is preserved and `updated_at` refreshed.
    #[tracing::instrument(skip(self, new_data), fields(product_id = %id))]
    pub fn update_product(&self, id: ProductId, new_data: Product) -> CatalogResult<Product> {
        let now = self.clock.now();
        let saved = self.modify(id, move |current| {
            validate_product(&new_data)?;
            let created_at = current.created_at;
            *current = Product {
                id: Some(id),
                created_at,
                updated_at: now.max(created_at),
                ..new_data
            };
            Ok(())
        })?;
        tracing::debug!("product updated");
        Ok(saved)
    }

    pub fn get_product_by_id(&self, id: ProductId) -> Option<Product> {
        self.store.find_by_id(id)
    }

    pub fn get_all_products(&self) -> Vec<Product> {
        self.store.find_all()
    }

    pub fn get_products_by_category(&self, category: &str) -> Vec<Product> {
        self.store.find_by_category(category)
    }

    pub fn search_products_by_name(&self, fragment: &str) -> Vec<Product> {
        self.store.find_by_name_containing(fragment)
    }

    /// Delete a product. Returns `false` if nothing was stored under `id`.
    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn delete_product(&self, id: ProductId) -> bool {
        self.store.delete_by_id(id)
    }

    pub fn exists(&self, id: ProductId) -> bool {
        self.store.exists_by_id(id)
    }

    /// Add `quantity` units to the product's stock.
    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn increase_stock(&self, id: ProductId, quantity: i64) -> CatalogResult<Product> {
        self.adjust_stock(id, |product, now| product.add_stock(quantity, now))
    }

    /// Remove `quantity` units from the product's stock.
    ///
    /// Fails with `InsufficientStock` (and leaves stock untouched) when
    /// `quantity` exceeds what is on hand.
    #[tracing::instrument(skip(self), fields(product_id = %id))]
    pub fn decrease_stock(&self, id: ProductId, quantity: i64) -> CatalogResult<Product> {
        self.adjust_stock(id, |product, now| product.reduce_stock(quantity, now))
    }

    pub fn get_total_products(&self) -> usize {
        self.store.count()
    }

    /// Remove every product. Meant for test/reset flows only.
    pub fn reset(&self) {
        self.store.delete_all();
    }

    fn adjust_stock<F>(&self, id: ProductId, apply: F) -> CatalogResult<Product>
    where
        F: FnOnce(&mut Product, DateTime<Utc>) -> CatalogResult<()>,
    {
        let now = self.clock.now();
        let saved = self.modify(id, |product| {
            // Keeps created_at <= updated_at even if the clock steps backwards.
            let stamp = now.max(product.created_at);
            apply(product, stamp)
        })?;
        tracing::debug!(stock = saved.stock, "stock adjusted");
        Ok(saved)
    }

    fn modify<F>(&self, id: ProductId, apply: F) -> CatalogResult<Product>
    where
        F: FnOnce(&mut Product) -> CatalogResult<()>,
    {
        self.store
            .update(id, apply)
            .unwrap_or_else(|| Err(CatalogError::not_found(id)))
            .inspect_err(log_rejection)
    }
}

fn log_rejection(err: &CatalogError) {
    tracing::warn!(kind = err.kind(), error = %err, "catalog request rejected");
}
