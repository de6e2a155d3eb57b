//! # Storefront Catalog
//!
//! Catalog service for a B2B fashion storefront: the product listing with
//! facet filters and sort modes, the brand showcase grid, an admin-only
//! duplicate cleanup tool, and session/admin resolution against a document
//! store.
//!
//! ## Features
//!
//! - **Listing pipeline**: dedup by id, facet filters, manual/newest/price/name ordering
//! - **Duplicate finder**: pluggable identity key, preview then delete-and-reload
//! - **Fail-closed admin checks**: any lookup failure means "not admin"
//! - **Pluggable stores**: in-memory for development, MongoDB behind a feature flag
//! - **Lenient records**: missing or malformed fields default instead of failing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! let store = InMemoryCatalogStore::with_products(vec![
//!     Product::new("1", "Shirt", "X").with_position(2),
//!     Product::new("2", "Shirt", "X").with_position(1),
//! ]);
//!
//! let listing = catalog::apply(
//!     &store.list_products().await?,
//!     &FilterCriteria::default(),
//!     &SortMode::Manual,
//! );
//!
//! ServerBuilder::new()
//!     .with_catalog_store(store)
//!     .serve(Some("127.0.0.1:3000"))
//!     .await?;
//! ```

pub mod brands;
pub mod catalog;
pub mod config;
pub mod core;
pub mod duplicates;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AdminResolver, AuthContext, AuthPolicy, Brand, BrandStore, CatalogQuery, CreatedAt,
        ErrorResponse, Facet, FilterCriteria, NoAuthProvider, Notice, NoticeLevel, PriceRange,
        Product, ProductStore, SessionProvider, SessionUser, SortMode, StorefrontError,
    };

    // === View models ===
    pub use crate::brands::{BrandCard, showcase};
    pub use crate::catalog::{self, FacetOptions, Listing, facet_options};
    pub use crate::duplicates::{
        DeleteOutcome, DuplicateCleaner, DuplicateGroup, DuplicateKey, NameBrandKey, find_groups,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryCatalogStore, InMemorySessionProvider, InMemoryUserDirectory};
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::{MongoCatalogStore, MongoUserDirectory};

    // === Config ===
    pub use crate::config::StorefrontConfig;

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
