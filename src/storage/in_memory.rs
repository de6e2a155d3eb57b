//! In-memory implementations of the store traits for testing and development

use crate::core::auth::bearer_token;
use crate::core::{
    AdminResolver, Brand, BrandStore, Product, ProductStore, SessionProvider, SessionUser,
    StorefrontError,
};
use anyhow::Result;
use async_trait::async_trait;
use axum::http::HeaderMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// Lock poisoning surfaces as an internal error
fn poisoned<T>(e: PoisonError<T>) -> StorefrontError {
    StorefrontError::Internal(format!("in-memory lock poisoned: {}", e))
}

/// In-memory product and brand collections
///
/// Records are kept in insertion order, which plays the role of store
/// order. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    products: Arc<RwLock<Vec<Product>>>,
    brands: Arc<RwLock<Vec<Brand>>>,
}

impl InMemoryCatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with products
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            brands: Arc::default(),
        }
    }

    pub fn insert_product(&self, product: Product) -> Result<()> {
        self.products
            .write()
            .map_err(poisoned)?
            .push(product);
        Ok(())
    }

    pub fn insert_brand(&self, brand: Brand) -> Result<()> {
        self.brands
            .write()
            .map_err(poisoned)?
            .push(brand);
        Ok(())
    }
}

#[async_trait]
impl ProductStore for InMemoryCatalogStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let products = self.products.read().map_err(poisoned)?;

        Ok(products.clone())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        let mut products = self.products.write().map_err(poisoned)?;

        // Records sharing an id are removed one at a time
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StorefrontError::NotFound { id: id.to_string() })?;
        products.remove(index);

        Ok(())
    }
}

#[async_trait]
impl BrandStore for InMemoryCatalogStore {
    async fn list_brands(&self) -> Result<Vec<Brand>> {
        let brands = self.brands.read().map_err(poisoned)?;

        Ok(brands.clone())
    }
}

/// In-memory `users` collection answering admin lookups
///
/// Documents are stored as raw JSON so that malformed flags (a string
/// `"true"`, a missing field) behave exactly as they would in the real
/// store: only a boolean `true` grants admin.
#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the document of a user
    pub fn put_user(&self, uid: impl Into<String>, document: Value) -> Result<()> {
        self.users
            .write()
            .map_err(poisoned)?
            .insert(uid.into(), document);
        Ok(())
    }
}

#[async_trait]
impl AdminResolver for InMemoryUserDirectory {
    async fn is_admin(&self, uid: &str) -> Result<bool> {
        let users = self.users.read().map_err(poisoned)?;

        Ok(users
            .get(uid)
            .and_then(|doc| doc.get("isAdmin"))
            .is_some_and(|flag| *flag == Value::Bool(true)))
    }
}

/// Bearer-token sessions held in memory
#[derive(Clone, Default)]
pub struct InMemorySessionProvider {
    sessions: Arc<RwLock<HashMap<String, SessionUser>>>,
}

impl InMemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session and return its bearer token
    pub fn sign_in(&self, user: SessionUser) -> Result<String> {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .map_err(poisoned)?
            .insert(token.clone(), user);
        Ok(token)
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn current_user(&self, headers: &HeaderMap) -> Result<Option<SessionUser>> {
        let Some(token) = bearer_token(headers) else {
            return Ok(None);
        };

        let sessions = self.sessions.read().map_err(poisoned)?;

        Ok(sessions.get(token).cloned())
    }

    async fn sign_out(&self, headers: &HeaderMap) -> Result<()> {
        let Some(token) = bearer_token(headers) else {
            return Ok(());
        };

        self.sessions
            .write()
            .map_err(poisoned)?
            .remove(token);

        Ok(())
    }
}
