//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::StorefrontConfig;
use crate::core::{AdminResolver, BrandStore, NoAuthProvider, ProductStore, SessionProvider};
use crate::duplicates::{DuplicateKey, NameBrandKey};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the storefront server
///
/// Stores are required; auth providers default to [`NoAuthProvider`]
/// (everyone anonymous), the duplicate key to [`NameBrandKey`] and the
/// configuration to [`StorefrontConfig::default`].
///
/// # Example
///
/// ```ignore
/// let store = InMemoryCatalogStore::new();
/// let app = ServerBuilder::new()
///     .with_catalog_store(store)
///     .with_session_provider(sessions)
///     .with_admin_resolver(users)
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: StorefrontConfig,
    products: Option<Arc<dyn ProductStore>>,
    brands: Option<Arc<dyn BrandStore>>,
    sessions: Arc<dyn SessionProvider>,
    admins: Arc<dyn AdminResolver>,
    duplicate_key: Arc<dyn DuplicateKey>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: StorefrontConfig::default(),
            products: None,
            brands: None,
            sessions: Arc::new(NoAuthProvider),
            admins: Arc::new(NoAuthProvider),
            duplicate_key: Arc::new(NameBrandKey),
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: StorefrontConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the product store (required)
    pub fn with_product_store(mut self, store: impl ProductStore + 'static) -> Self {
        self.products = Some(Arc::new(store));
        self
    }

    /// Set the brand store (required)
    pub fn with_brand_store(mut self, store: impl BrandStore + 'static) -> Self {
        self.brands = Some(Arc::new(store));
        self
    }

    /// Use one backend for both products and brands
    pub fn with_catalog_store<S>(mut self, store: S) -> Self
    where
        S: ProductStore + BrandStore + 'static,
    {
        let store = Arc::new(store);
        self.products = Some(store.clone());
        self.brands = Some(store);
        self
    }

    pub fn with_session_provider(mut self, sessions: impl SessionProvider + 'static) -> Self {
        self.sessions = Arc::new(sessions);
        self
    }

    pub fn with_admin_resolver(mut self, admins: impl AdminResolver + 'static) -> Self {
        self.admins = Arc::new(admins);
        self
    }

    /// Replace the identity key used by the duplicate finder
    pub fn with_duplicate_key(mut self, key: impl DuplicateKey + 'static) -> Self {
        self.duplicate_key = Arc::new(key);
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for endpoints outside the storefront, such as a sign-in
    /// flow or webhooks.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let products = self.products.take().ok_or_else(|| {
            anyhow::anyhow!("ProductStore is required. Call .with_product_store()")
        })?;
        let brands = self
            .brands
            .take()
            .ok_or_else(|| anyhow::anyhow!("BrandStore is required. Call .with_brand_store()"))?;

        Ok(ServerHost {
            config: Arc::new(self.config),
            products,
            brands,
            sessions: self.sessions,
            admins: self.admins,
            duplicate_key: self.duplicate_key,
        })
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr`, or to the configured `listen_addr` when `None`, and
    /// stops on SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: Option<&str>) -> Result<()> {
        let addr = addr
            .map(str::to_string)
            .unwrap_or_else(|| self.config.listen_addr.clone());
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}


/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
