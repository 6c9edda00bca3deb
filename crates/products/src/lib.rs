//! Products domain module.
//!
//! This crate contains the `Product` entity and its business rules (field
//! invariants, stock adjustments), implemented as deterministic domain logic
//! with no storage concerns.

pub mod product;
pub mod validation;

pub use product::Product;
pub use validation::validate_product;
