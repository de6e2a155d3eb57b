//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoCatalogStore` (products and brands) and
//! `MongoUserDirectory` (admin flags) backed by a `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag.
//!
//! # Storage model
//!
//! One collection per record kind: `products`, `brands` and `users`. The
//! document `_id` is the record identifier; it is exposed as `id`.
//!
//! # Serialization strategy
//!
//! Documents are converted to `serde_json::Value` first and then decoded
//! with the lenient record decoders, so loosely shaped documents (missing
//! prices, timestamps stored as `{ seconds }` objects) load without errors.

use crate::core::{AdminResolver, Brand, BrandStore, Product, ProductStore, StorefrontError};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use serde::de::DeserializeOwned;

pub const PRODUCTS_COLLECTION: &str = "products";
pub const BRANDS_COLLECTION: &str = "brands";
pub const USERS_COLLECTION: &str = "users";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a BSON Document into a serde_json::Value,
/// renaming `_id` → `id` for record convention.
fn document_to_json(mut doc: Document) -> serde_json::Value {
    if let Some(id) = doc.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
            other => other,
        };
        doc.insert("id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

fn document_to_record<T: DeserializeOwned>(doc: Document) -> Result<T> {
    serde_json::from_value(document_to_json(doc))
        .map_err(|e| anyhow!("Failed to deserialize record from document: {}", e))
}

/// Filter matching a record id stored either as a string or an ObjectId
fn id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "_id": { "$in": [id, oid] } },
        Err(_) => doc! { "_id": id },
    }
}

async fn load_all<T: DeserializeOwned>(database: &Database, collection: &str) -> Result<Vec<T>> {
    let cursor = database
        .collection::<Document>(collection)
        .find(doc! {})
        .await
        .map_err(|e| anyhow!("Failed to list {}: {}", collection, e))?;

    let docs: Vec<Document> = cursor
        .try_collect()
        .await
        .map_err(|e| anyhow!("Failed to collect {}: {}", collection, e))?;

    docs.into_iter().map(document_to_record).collect()
}

// ---------------------------------------------------------------------------
// MongoCatalogStore
// ---------------------------------------------------------------------------

/// Product and brand collections backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use storefront::storage::MongoCatalogStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoCatalogStore::new(client.database("storefront"));
/// let products = store.list_products().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoCatalogStore {
    database: Database,
}

impl MongoCatalogStore {
    /// Create a new `MongoCatalogStore` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

#[async_trait]
impl ProductStore for MongoCatalogStore {
    /// List every product in natural collection order.
    async fn list_products(&self) -> Result<Vec<Product>> {
        load_all(&self.database, PRODUCTS_COLLECTION).await
    }

    /// Delete a product by id.
    ///
    /// Returns `NotFound` when no document matched.
    async fn delete_product(&self, id: &str) -> Result<()> {
        let result = self
            .database
            .collection::<Document>(PRODUCTS_COLLECTION)
            .delete_one(id_filter(id))
            .await
            .map_err(|e| anyhow!("Failed to delete product: {}", e))?;

        if result.deleted_count == 0 {
            return Err(StorefrontError::NotFound { id: id.to_string() }.into());
        }

        Ok(())
    }
}

#[async_trait]
impl BrandStore for MongoCatalogStore {
    async fn list_brands(&self) -> Result<Vec<Brand>> {
        load_all(&self.database, BRANDS_COLLECTION).await
    }
}

// ---------------------------------------------------------------------------
// MongoUserDirectory
// ---------------------------------------------------------------------------

/// Admin flags read from the `users` collection.
///
/// A user is an admin when their document exists and its `isAdmin` field is
/// the boolean `true`.
#[derive(Clone, Debug)]
pub struct MongoUserDirectory {
    database: Database,
}

impl MongoUserDirectory {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl AdminResolver for MongoUserDirectory {
    async fn is_admin(&self, uid: &str) -> Result<bool> {
        let user = self
            .database
            .collection::<Document>(USERS_COLLECTION)
            .find_one(id_filter(uid))
            .await
            .map_err(|e| anyhow!("Failed to read user document: {}", e))?;

        Ok(user.is_some_and(|doc| matches!(doc.get("isAdmin"), Some(Bson::Boolean(true)))))
    }
}
