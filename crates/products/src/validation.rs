//! Entity invariants checked before any create/update is persisted.

use rust_decimal::Decimal;

use catalog_core::{CatalogError, CatalogResult};

use crate::product::Product;

/// Check the product's field invariants.
///
/// Checks run in a fixed order (name, price, stock) and only the first failure
/// is reported.
pub fn validate_product(product: &Product) -> CatalogResult<()> {
    if product.name.trim().is_empty() {
        return Err(CatalogError::invalid_product("name required"));
    }
    if product.price < Decimal::ZERO {
        return Err(CatalogError::invalid_product("price must be non-negative"));
    }
    if product.stock < 0 {
        return Err(CatalogError::invalid_product("stock must be non-negative"));
    }
    Ok(())
}
