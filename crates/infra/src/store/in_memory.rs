use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{Entity, ProductId};
use catalog_products::Product;

use super::{ProductStore, StoreError};

#[derive(Debug)]
struct StoreState {
    records: BTreeMap<ProductId, Product>,
    /// Next id to hand out; every stored id is below it. `u64::MAX` is never an
    /// id, and reaching it means the sequence is exhausted.
    next_id: u64,
}

impl StoreState {
    fn allocate_id(&mut self) -> Result<ProductId, StoreError> {
        if self.next_id == u64::MAX {
            return Err(StoreError::IdSequenceExhausted);
        }
        let id = ProductId::new(self.next_id);
        self.next_id += 1;
        Ok(id)
    }

    fn reserve_past(&mut self, id: ProductId) -> Result<(), StoreError> {
        let after = id
            .get()
            .checked_add(1)
            .ok_or(StoreError::IdOutOfRange(id))?;
        self.next_id = self.next_id.max(after);
        Ok(())
    }
}

/// In-memory product store for tests/dev and the demo driver.
///
/// Records and the id sequence share one lock, so an id is allocated under the
/// same write guard as the insert that uses it, and `update` runs its whole
/// read-modify-write under that guard.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<StoreState>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    // Poisoning is recovered from: no write leaves partial state behind.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn filter<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.read()
            .records
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryProductStore {
    fn save(&self, mut product: Product) -> Result<Product, StoreError> {
        let mut state = self.write();
        let id = match Entity::id(&product).copied() {
            Some(id) => {
                state.reserve_past(id)?;
                id
            }
            None => {
                let id = state.allocate_id()?;
                product.id = Some(id);
                id
            }
        };
        state.records.insert(id, product.clone());
        drop(state);

        tracing::info!(product_id = %id, name = %product.name, "product saved");
        Ok(product)
    }

    fn update<F, E>(&self, id: ProductId, apply: F) -> Option<Result<Product, E>>
    where
        F: FnOnce(&mut Product) -> Result<(), E>,
    {
        let mut state = self.write();
        let current = state.records.get_mut(&id)?;

        let mut candidate = current.clone();
        if let Err(e) = apply(&mut candidate) {
            return Some(Err(e));
        }
        candidate.id = Some(id);
        *current = candidate.clone();
        drop(state);

        tracing::info!(product_id = %id, name = %candidate.name, "product saved");
        Some(Ok(candidate))
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().records.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Product> {
        self.read().records.values().cloned().collect()
    }

    fn find_by_category(&self, category: &str) -> Vec<Product> {
        if category.trim().is_empty() {
            return vec![];
        }
        let wanted = category.to_lowercase();
        self.filter(|p| p.category.to_lowercase() == wanted)
    }

    fn find_by_name_containing(&self, fragment: &str) -> Vec<Product> {
        if fragment.trim().is_empty() {
            return vec![];
        }
        let wanted = fragment.to_lowercase();
        self.filter(|p| p.name.to_lowercase().contains(&wanted))
    }

    fn delete_by_id(&self, id: ProductId) -> bool {
        let removed = self.write().records.remove(&id);
        match removed {
            Some(product) => {
                tracing::info!(product_id = %id, name = %product.name, "product deleted");
                true
            }
            None => false,
        }
    }

    fn exists_by_id(&self, id: ProductId) -> bool {
        self.read().records.contains_key(&id)
    }

    fn count(&self) -> usize {
        self.read().records.len()
    }

    fn delete_all(&self) {
        self.write().records.clear();
        tracing::info!("all products deleted");
    }
}
