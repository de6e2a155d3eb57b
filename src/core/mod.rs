//! Core module containing the catalog records, store traits and auth types

pub mod auth;
pub mod error;
pub mod notice;
pub mod product;
pub mod query;
pub mod service;

pub use auth::{AdminResolver, AuthContext, AuthPolicy, NoAuthProvider, SessionProvider, SessionUser};
pub use error::{ErrorResponse, StorefrontError};
pub use notice::{Notice, NoticeLevel};
pub use product::{Brand, CreatedAt, Product};
pub use query::{CatalogQuery, Facet, FilterCriteria, PriceRange, SortMode};
pub use service::{BrandStore, ProductStore};
