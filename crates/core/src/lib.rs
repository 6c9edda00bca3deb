//! `catalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no IO).

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use clock::{Clock, SystemClock};
pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::{ParseProductIdError, ProductId};
