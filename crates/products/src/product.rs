use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, CatalogResult, Entity, ProductId};

/// Entity: Product.
///
/// Fields are public: callers build a `Product` and hand it to the catalog
/// service, which validates it and commits a copy to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the store on first save; `None` until then.
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
    #[serde(default)]
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// New, unsaved product with an empty description.
    ///
    /// Timestamps start at "now"; the catalog service re-stamps them when the
    /// product is created.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        stock: i64,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            price,
            stock,
            category: category.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True when there is at least one unit on hand.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Add `quantity` units to stock.
    pub fn add_stock(&mut self, quantity: i64, now: DateTime<Utc>) -> CatalogResult<()> {
        if quantity < 0 {
            return Err(CatalogError::invalid_quantity(quantity));
        }
        self.stock = self
            .stock
            .checked_add(quantity)
            .ok_or_else(|| CatalogError::invalid_quantity(quantity))?;
        self.updated_at = now;
        Ok(())
    }

    /// Remove `quantity` units from stock. Stock never goes negative.
    pub fn reduce_stock(&mut self, quantity: i64, now: DateTime<Utc>) -> CatalogResult<()> {
        if quantity < 0 {
            return Err(CatalogError::invalid_quantity(quantity));
        }
        if quantity > self.stock {
            return Err(CatalogError::insufficient_stock(quantity, self.stock));
        }
        self.stock -= quantity;
        self.updated_at = now;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}
