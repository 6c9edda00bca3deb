//! Strongly-typed identifiers used across the domain.

use core::num::ParseIntError;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a product.
///
/// Assigned by the store on first save from a per-store sequence starting at 1.
/// An unsaved product carries `Option<ProductId>::None`, never a sentinel value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// A string that is not a valid product identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier: ProductId: {0}")]
pub struct ParseProductIdError(#[from] ParseIntError);

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u64>()?;
        Ok(Self(value))
    }
}
