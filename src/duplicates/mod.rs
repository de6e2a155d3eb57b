//! Duplicate product detection for the admin cleanup tool
//!
//! Records are grouped by an identity key and every group with more than
//! one member is reported. The key is a pluggable [`DuplicateKey`] strategy;
//! the default [`NameBrandKey`] lowercases `name|brand`, which is a crude
//! heuristic: two different products sharing a name and brand are reported
//! as duplicates, and a real duplicate with a typo in its name is missed.
//!
//! Finding groups is a read-only preview. Deleting goes through
//! [`DuplicateCleaner`], which removes one record and then reloads the whole
//! collection to recompute the groups. Nothing guards the read, delete,
//! reload sequence against another admin deleting at the same time, so a
//! preview can be stale.

use crate::core::{Product, ProductStore};
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// Strategy computing the identity key of a product
pub trait DuplicateKey: Send + Sync {
    fn key(&self, product: &Product) -> String;
}

/// Lowercased `name|brand`
#[derive(Debug, Clone, Copy, Default)]
pub struct NameBrandKey;

impl DuplicateKey for NameBrandKey {
    fn key(&self, product: &Product) -> String {
        format!("{}|{}", product.name, product.brand).to_lowercase()
    }
}

impl<F> DuplicateKey for F
where
    F: Fn(&Product) -> String + Send + Sync,
{
    fn key(&self, product: &Product) -> String {
        self(product)
    }
}

/// Two or more records sharing an identity key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub key: String,
    pub members: Vec<Product>,
}

impl DuplicateGroup {
    /// Display name of the group, taken from its first member
    pub fn label(&self) -> &str {
        self.members.first().map(|p| p.name.as_str()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group the collection and keep the groups with at least two members
///
/// Groups appear in the order their key was first seen; members keep
/// collection order.
pub fn find_groups(products: &[Product], key: &dyn DuplicateKey) -> Vec<DuplicateGroup> {
    let mut groups: IndexMap<String, Vec<Product>> = IndexMap::new();
    for product in products {
        groups
            .entry(key.key(product))
            .or_default()
            .push(product.clone());
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(key, members)| DuplicateGroup { key, members })
        .collect()
}

/// Preview and delete duplicates against a product store
#[derive(Clone)]
pub struct DuplicateCleaner {
    store: Arc<dyn ProductStore>,
    key: Arc<dyn DuplicateKey>,
}

impl DuplicateCleaner {
    pub fn new(store: Arc<dyn ProductStore>, key: Arc<dyn DuplicateKey>) -> Self {
        Self { store, key }
    }

    /// Load the full collection and compute duplicate groups
    pub async fn preview(&self) -> Result<Vec<DuplicateGroup>> {
        let products = self.store.list_products().await?;
        let groups = find_groups(&products, self.key.as_ref());
        tracing::debug!(
            products = products.len(),
            groups = groups.len(),
            "computed duplicate groups"
        );
        Ok(groups)
    }

    /// Delete one record, then reload and recompute the groups
    ///
    /// Only a failed delete is an error. Once the record is gone a failed
    /// reload is carried in the outcome instead.
    pub async fn delete_and_reload(&self, id: &str) -> Result<DeleteOutcome> {
        self.store.delete_product(id).await?;
        tracing::info!(product_id = %id, "deleted duplicate product");

        let reload = self.preview().await;
        if let Err(e) = &reload {
            tracing::warn!(product_id = %id, error = %e, "reload after delete failed");
        }
        Ok(DeleteOutcome { reload })
    }
}

/// A completed delete and the reload that followed it
#[derive(Debug)]
pub struct DeleteOutcome {
    pub reload: Result<Vec<DuplicateGroup>>,
}
