//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds every injected dependency of the storefront: the
//! stores, the auth providers, the duplicate key strategy and the
//! configuration. Handlers receive it as shared state; nothing lives in
//! globals.

use crate::config::StorefrontConfig;
use crate::core::auth::resolve_context;
use crate::core::{AdminResolver, AuthContext, BrandStore, ProductStore, SessionProvider};
use crate::duplicates::{DuplicateCleaner, DuplicateKey};
use axum::http::HeaderMap;
use std::sync::Arc;

/// Host context containing all service state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerBuilder::new()
///     .with_catalog_store(InMemoryCatalogStore::new())
///     .build_host()?);
///
/// let app = RestExposure::build_router(host, vec![])?;
/// ```
#[derive(Clone)]
pub struct ServerHost {
    pub config: Arc<StorefrontConfig>,

    pub products: Arc<dyn ProductStore>,

    pub brands: Arc<dyn BrandStore>,

    /// Source of the current identity
    pub sessions: Arc<dyn SessionProvider>,

    /// Source of the admin flag
    pub admins: Arc<dyn AdminResolver>,

    /// Identity key used by the duplicate finder
    pub duplicate_key: Arc<dyn DuplicateKey>,
}

impl ServerHost {
    /// Duplicate cleaner bound to this host's product store and key strategy
    pub fn cleaner(&self) -> DuplicateCleaner {
        DuplicateCleaner::new(self.products.clone(), self.duplicate_key.clone())
    }

    /// Resolve the auth context of a request; never fails
    pub async fn auth_context(&self, headers: &HeaderMap) -> AuthContext {
        resolve_context(self.sessions.as_ref(), self.admins.as_ref(), headers).await
    }
}
