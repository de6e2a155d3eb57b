//! Router builder for the storefront routes

use crate::server::handlers::{
    delete_product, list_brands, list_duplicates, list_products, logout, product_facets, session,
};
use crate::server::host::ServerHost;
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Build the storefront routes
///
/// - GET /products - Filtered and sorted listing
/// - GET /products/facets - Selectable filter values
/// - GET /brands - Brand showcase cards
/// - GET /auth/session - Current user and admin flag
/// - POST /auth/logout - End the session, redirect to login
/// - GET /admin/duplicates - Duplicate groups (admin)
/// - DELETE /admin/products/{id} - Delete a product, return new groups (admin)
pub fn build_storefront_routes(host: Arc<ServerHost>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/facets", get(product_facets))
        .route("/brands", get(list_brands))
        .route("/auth/session", get(session))
        .route("/auth/logout", post(logout))
        .route("/admin/duplicates", get(list_duplicates))
        .route("/admin/products/{id}", delete(delete_product))
        .with_state(host)
}
