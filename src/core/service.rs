//! Store traits for the catalog collections
//!
//! The storefront never owns its records: products and brands live in an
//! external document store. These traits are the only way the service reads
//! or mutates them, so any backend (in-memory, MongoDB) can be plugged in.

use crate::core::{Brand, Product};
use anyhow::Result;
use async_trait::async_trait;

/// Access to the product collection
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch the full collection in store order
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Remove one product by identifier
    ///
    /// Fails with [`crate::core::StorefrontError::NotFound`] when no record has
    /// that identifier.
    async fn delete_product(&self, id: &str) -> Result<()>;
}

/// Read access to the brand collection
#[async_trait]
pub trait BrandStore: Send + Sync {
    async fn list_brands(&self) -> Result<Vec<Brand>>;
}
