//! Infrastructure layer: product storage and the catalog service built on it.

pub mod catalog_service;
pub mod store;

pub use catalog_service::CatalogService;
pub use store::{InMemoryProductStore, ProductStore, StoreError};
