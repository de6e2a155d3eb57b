//! Shared test harness for catalog store testing
//!
//! Provides a small but realistic catalog (products with and without manual
//! positions, a name/brand duplicate pair, brand documents), the
//! [`SeedCatalog`] trait backends implement so the contract suite can load
//! fixtures into them, and the `catalog_store_tests!` macro.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod catalog_store_tests;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use storefront::prelude::*;

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Loads fixture records into a backend
///
/// The store traits are read-mostly (the storefront never creates products),
/// so each backend under test provides its own way to write fixtures.
#[async_trait]
pub trait SeedCatalog: ProductStore + BrandStore {
    async fn seed_products(&self, products: &[Product]);
    async fn seed_brands(&self, brands: &[Brand]);
}

#[async_trait]
impl SeedCatalog for InMemoryCatalogStore {
    async fn seed_products(&self, products: &[Product]) {
        for product in products {
            self.insert_product(product.clone()).unwrap();
        }
    }

    async fn seed_brands(&self, brands: &[Brand]) {
        for brand in brands {
            self.insert_brand(brand.clone()).unwrap();
        }
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Epoch seconds for a day in spring 2025
pub fn created_on(day: u32) -> f64 {
    Utc.with_ymd_and_hms(2025, 3, day, 10, 0, 0)
        .unwrap()
        .timestamp() as f64
}

/// Six products covering every facet
///
/// - `k1` and `k3` share name and brand (one duplicate group)
/// - `k1` and `l4` carry manual positions, the rest do not
/// - `d5` is the only product under 500
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("k1", "Anarkali Kurta", "Lasoon")
            .with_category("Kurta")
            .with_color("Red")
            .with_price(1200.0)
            .with_sizes(["S", "M"])
            .with_position(2)
            .with_created_at(CreatedAt::Epoch(created_on(1))),
        Product::new("s2", "Banarasi Saree", "Princy")
            .with_category("Saree")
            .with_color("Blue")
            .with_price(3400.0)
            .with_sizes(["Free"])
            .with_created_at(CreatedAt::Timestamp {
                seconds: created_on(3),
            }),
        Product::new("k3", "Anarkali Kurta", "Lasoon")
            .with_category("Kurta")
            .with_color("Red")
            .with_price(1250.0)
            .with_sizes(["M", "L"])
            .with_created_at(CreatedAt::Epoch(created_on(2))),
        Product::new("l4", "Bridal Lehenga", "Pampara")
            .with_category("Lehenga")
            .with_color("Green")
            .with_price(8900.0)
            .with_sizes(["M"])
            .with_position(1)
            .with_created_at(CreatedAt::Epoch(created_on(4))),
        Product::new("d5", "Chiffon Dupatta", "Soulwin")
            .with_category("Dupatta")
            .with_color("Yellow")
            .with_price(450.0)
            .with_sizes(["Free"])
            .with_created_at(CreatedAt::Epoch(created_on(5))),
        Product::new("k6", "Straight Kurta", "Belly 11")
            .with_category("Kurta")
            .with_color("Blue")
            .with_price(999.0)
            .with_sizes(["XL"])
            .with_created_at(CreatedAt::Epoch(created_on(6))),
    ]
}

pub fn sample_brands() -> Vec<Brand> {
    let mut lasoon = Brand::new("lasoon", "Lasoon");
    lasoon.seasons = vec!["SS25".to_string(), "AW25".to_string()];

    let mut atelier = Brand::new("atelier-nine", "Atelier Nine");
    atelier.image = Some("/uploads/atelier-nine.png".to_string());

    vec![lasoon, Brand::new("princy", "Princy"), atelier]
}

/// Ids of products, sorted, for order-insensitive comparison
pub fn sorted_ids(products: &[Product]) -> Vec<String> {
    let mut ids: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids
}

/// Ids of products in the given order
pub fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

pub fn assert_not_found(err: anyhow::Error, expected_id: &str) {
    match err.downcast::<StorefrontError>() {
        Ok(StorefrontError::NotFound { id }) => assert_eq!(id, expected_id),
        other => panic!("Expected NotFound for '{}', got {:?}", expected_id, other),
    }
}
