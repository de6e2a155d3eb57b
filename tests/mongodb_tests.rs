//! Integration tests for the MongoDB backend using the storage test harness.
//!
//! Invokes `catalog_store_tests!` to validate that `MongoCatalogStore`
//! conforms to the catalog store contract, then checks the loosely shaped
//! documents the storefront has to tolerate and the admin flag lookup of
//! `MongoUserDirectory`.
//!
//! # Requirements
//!
//! - Docker must be running (testcontainers launches a MongoDB container)
//! - Feature flag `mongodb_backend` must be enabled
//!
//! # Running
//!
//! ```sh
//! cargo test --features mongodb_backend --test mongodb_tests -- --test-threads=1
//! ```
//!
//! # Test isolation
//!
//! All tests share a single MongoDB container (via `OnceLock`). Each test
//! gets its own database.

#![cfg(feature = "mongodb_backend")]

#[macro_use]
mod storage_harness;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Database};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use storage_harness::*;
use storefront::prelude::*;
use storefront::storage::mongodb::{BRANDS_COLLECTION, PRODUCTS_COLLECTION, USERS_COLLECTION};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

// ---------------------------------------------------------------------------
// Shared test environment (single container, fresh database per test)
// ---------------------------------------------------------------------------

/// Holds the testcontainer handle (keeps it alive) and the connection URL.
struct MongoTestEnv {
    /// Container handle; dropping it stops the MongoDB container.
    _container: testcontainers::ContainerAsync<Mongo>,
    connection_url: String,
}

/// Global test environment, initialized once per test binary.
static TEST_ENV: OnceLock<MongoTestEnv> = OnceLock::new();

async fn init_mongo_env() -> &'static MongoTestEnv {
    if let Some(env) = TEST_ENV.get() {
        return env;
    }

    let container = Mongo::default()
        .start()
        .await
        .expect("Failed to start MongoDB container. Is Docker running?");

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(27017).await.unwrap();
    let url = format!("mongodb://{}:{}", host, port);

    let env = MongoTestEnv {
        _container: container,
        connection_url: url,
    };

    let _ = TEST_ENV.set(env);
    TEST_ENV.get().unwrap()
}

/// Atomic counter to generate unique database names per test.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

async fn mongo_database() -> Database {
    let env = init_mongo_env().await;
    let client = Client::with_uri_str(&env.connection_url)
        .await
        .expect("Failed to connect to MongoDB");
    let db_num = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    client.database(&format!("storefront_test_{}", db_num))
}

async fn clean_mongo_catalog_store() -> MongoCatalogStore {
    MongoCatalogStore::new(mongo_database().await)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Serialize a record and move its `id` into `_id`
fn to_store_document<T: Serialize>(record: &T) -> Document {
    let mut document = mongodb::bson::to_document(record).unwrap();
    if let Some(id) = document.remove("id") {
        document.insert("_id", id);
    }
    document
}

async fn insert_documents(database: &Database, collection: &str, documents: Vec<Document>) {
    if documents.is_empty() {
        return;
    }
    database
        .collection::<Document>(collection)
        .insert_many(documents)
        .await
        .unwrap();
}

#[async_trait]
impl SeedCatalog for MongoCatalogStore {
    async fn seed_products(&self, products: &[Product]) {
        let documents = products.iter().map(to_store_document).collect();
        insert_documents(self.database(), PRODUCTS_COLLECTION, documents).await;
    }

    async fn seed_brands(&self, brands: &[Brand]) {
        let documents = brands.iter().map(to_store_document).collect();
        insert_documents(self.database(), BRANDS_COLLECTION, documents).await;
    }
}

// ---------------------------------------------------------------------------
// Test suites via macros
// ---------------------------------------------------------------------------

catalog_store_tests!(clean_mongo_catalog_store().await);

// ---------------------------------------------------------------------------
// Loosely shaped documents
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_malformed_fields_are_defaulted() {
    let store = clean_mongo_catalog_store().await;
    insert_documents(
        store.database(),
        PRODUCTS_COLLECTION,
        vec![
            doc! {
                "_id": "odd",
                "name": "Kurta",
                "price": "1499",
                "sizes": "M",
                "position": "first",
                "createdAt": { "seconds": 1_714_000_000_i64, "nanoseconds": 0 },
            },
            doc! { "_id": "bare" },
        ],
    )
    .await;

    let products = store.list_products().await.unwrap();
    let odd = products.iter().find(|p| p.id == "odd").unwrap();
    assert!((odd.price - 1499.0).abs() < f64::EPSILON);
    assert!(odd.sizes.is_empty());
    assert_eq!(odd.position, None);
    assert_eq!(odd.created_seconds(), 1_714_000_000.0);

    let bare = products.iter().find(|p| p.id == "bare").unwrap();
    assert_eq!(bare.name, "");
    assert_eq!(bare.price, 0.0);
    assert_eq!(bare.created_at, None);
}

#[tokio::test]
async fn test_object_id_products_can_be_deleted() {
    let store = clean_mongo_catalog_store().await;
    let oid = ObjectId::new();
    insert_documents(
        store.database(),
        PRODUCTS_COLLECTION,
        vec![doc! { "_id": oid, "name": "Saree", "brand": "Princy" }],
    )
    .await;

    let products = store.list_products().await.unwrap();
    assert_eq!(products[0].id, oid.to_hex());

    store.delete_product(&oid.to_hex()).await.unwrap();
    assert!(store.list_products().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Admin lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_admin_flag_must_be_boolean_true() {
    let database = mongo_database().await;
    insert_documents(
        &database,
        USERS_COLLECTION,
        vec![
            doc! { "_id": "root", "isAdmin": true },
            doc! { "_id": "string", "isAdmin": "true" },
            doc! { "_id": "number", "isAdmin": 1 },
            doc! { "_id": "plain", "displayName": "Plain" },
            doc! { "_id": "nulled", "isAdmin": Bson::Null },
        ],
    )
    .await;

    let users = MongoUserDirectory::new(database);
    assert!(users.is_admin("root").await.unwrap());
    for uid in ["string", "number", "plain", "nulled", "missing"] {
        assert!(!users.is_admin(uid).await.unwrap(), "'{}' must not be admin", uid);
    }
}
