//! Macro-generated test suite for catalog store contract validation.
//!
//! The `catalog_store_tests!` macro generates a test module that validates
//! any `ProductStore + BrandStore` backend: listing, lenient record loading,
//! delete semantics, and the duplicate cleanup flow running on top of it.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use storefront::storage::InMemoryCatalogStore;
//!
//! catalog_store_tests!(InMemoryCatalogStore::new());
//! ```
//!
//! # Generated Tests
//!
//! ## Listing
//! - `test_list_empty`: a fresh store lists nothing
//! - `test_list_all_products`: every seeded product comes back
//! - `test_record_fields_survive`: price, sizes, position and creation time load intact
//! - `test_list_brands`: every seeded brand comes back
//!
//! ## Delete
//! - `test_delete_existing`: only the targeted product disappears
//! - `test_delete_nonexistent`: unknown id is `NotFound`
//! - `test_delete_twice`: the second delete of the same id is `NotFound`
//!
//! ## On top of the store
//! - `test_listing_pipeline`: filtered manual listing over stored records
//! - `test_duplicate_cleanup_flow`: preview, delete, recomputed groups
//! - `test_concurrent_listing`: parallel reads from spawned tasks

/// Generate a catalog store conformance test suite.
///
/// `$factory` must be an expression evaluating to an empty store that
/// implements `SeedCatalog` and `Clone + 'static`. It is re-evaluated for
/// each test to ensure isolation.
#[macro_export]
macro_rules! catalog_store_tests {
    ($factory:expr) => {
        mod catalog_store_contract_tests {
            use super::*;
            use std::sync::Arc;
            use storefront::prelude::*;

            // ==================================================================
            // Listing
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;

                let products = store.list_products().await.unwrap();
                assert!(products.is_empty(), "A fresh store should list nothing");
                assert!(store.list_brands().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_all_products() {
                let store = $factory;
                store.seed_products(&sample_products()).await;

                let products = store.list_products().await.unwrap();
                assert_eq!(products.len(), 6);
                assert_eq!(sorted_ids(&products), sorted_ids(&sample_products()));
            }

            #[tokio::test]
            async fn test_record_fields_survive() {
                let store = $factory;
                store.seed_products(&sample_products()).await;

                let products = store.list_products().await.unwrap();
                let lehenga = products.iter().find(|p| p.id == "l4").unwrap();
                assert_eq!(lehenga.name, "Bridal Lehenga");
                assert_eq!(lehenga.brand, "Pampara");
                assert_eq!(lehenga.category, "Lehenga");
                assert_eq!(lehenga.color, "Green");
                assert!((lehenga.price - 8900.0).abs() < f64::EPSILON);
                assert_eq!(lehenga.sizes, vec!["M".to_string()]);
                assert_eq!(lehenga.position, Some(1));
                assert_eq!(lehenga.created_seconds(), created_on(4));

                let saree = products.iter().find(|p| p.id == "s2").unwrap();
                assert_eq!(saree.position, None);
                assert_eq!(saree.created_seconds(), created_on(3));
            }

            #[tokio::test]
            async fn test_list_brands() {
                let store = $factory;
                store.seed_brands(&sample_brands()).await;

                let brands = store.list_brands().await.unwrap();
                assert_eq!(brands.len(), 3);

                let lasoon = brands.iter().find(|b| b.id == "lasoon").unwrap();
                assert_eq!(lasoon.name, "Lasoon");
                assert_eq!(lasoon.seasons, vec!["SS25".to_string(), "AW25".to_string()]);

                let atelier = brands.iter().find(|b| b.id == "atelier-nine").unwrap();
                assert_eq!(atelier.image.as_deref(), Some("/uploads/atelier-nine.png"));
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                store.seed_products(&sample_products()).await;

                store.delete_product("k3").await.unwrap();

                let products = store.list_products().await.unwrap();
                assert_eq!(products.len(), 5);
                assert!(products.iter().all(|p| p.id != "k3"));
                assert!(products.iter().any(|p| p.id == "k1"));
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory;
                store.seed_products(&sample_products()).await;

                let err = store.delete_product("ghost").await.unwrap_err();
                assert_not_found(err, "ghost");
                assert_eq!(store.list_products().await.unwrap().len(), 6);
            }

            #[tokio::test]
            async fn test_delete_twice() {
                let store = $factory;
                store.seed_products(&sample_products()).await;

                store.delete_product("d5").await.unwrap();
                let err = store.delete_product("d5").await.unwrap_err();
                assert_not_found(err, "d5");
            }

            // ==================================================================
            // On top of the store
            // ==================================================================

            #[tokio::test]
            async fn test_listing_pipeline() {
                let store = $factory;
                store.seed_products(&sample_products()).await;

                let products = store.list_products().await.unwrap();
                let mut criteria = FilterCriteria::default();
                criteria.toggle(Facet::Categories, "Kurta", true);

                // k1 is pinned, so the manual order wins over the price sort
                let listing = Listing::build(&products, &criteria, SortMode::PriceAscending);
                assert_eq!(ids(&listing.products), vec!["k1", "k6", "k3"]);
                assert_eq!(listing.shown, 3);
                assert_eq!(listing.total, 6);
            }

            #[tokio::test]
            async fn test_duplicate_cleanup_flow() {
                let store = Arc::new($factory);
                store.seed_products(&sample_products()).await;

                let cleaner = DuplicateCleaner::new(store.clone(), Arc::new(NameBrandKey));

                let groups = cleaner.preview().await.unwrap();
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].key, "anarkali kurta|lasoon");
                assert_eq!(sorted_ids(&groups[0].members), vec!["k1", "k3"]);

                let outcome = cleaner.delete_and_reload("k3").await.unwrap();
                let groups = outcome.reload.unwrap();
                assert!(groups.is_empty(), "Deleting one of the pair resolves the group");
                assert_eq!(store.list_products().await.unwrap().len(), 5);
            }

            #[tokio::test]
            async fn test_concurrent_listing() {
                let store = $factory;
                store.seed_products(&sample_products()).await;

                let mut handles = Vec::new();
                for _ in 0..8 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store.list_products().await.unwrap().len()
                    }));
                }

                for handle in handles {
                    assert_eq!(handle.await.unwrap(), 6);
                }
            }
        }
    };
}
