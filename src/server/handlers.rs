//! HTTP handlers for the storefront routes
//!
//! Store failures surface as a `StorefrontError` whose body carries an
//! error notice; nothing is retried and no state changes on failure.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;

use crate::brands::{BrandCard, showcase};
use crate::catalog::{FacetOptions, Listing, facet_options};
use crate::core::{CatalogQuery, Notice, SessionUser, StorefrontError};
use crate::duplicates::DuplicateGroup;
use crate::server::extractors::{AdminAuth, CurrentAuth};
use crate::server::host::ServerHost;

/// Response for the session endpoint
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
    pub is_admin: bool,
}

/// Response for the duplicate preview endpoint
#[derive(Debug, Serialize)]
pub struct DuplicatesResponse {
    pub groups: Vec<DuplicateGroup>,
    pub count: usize,
}

impl DuplicatesResponse {
    fn new(groups: Vec<DuplicateGroup>) -> Self {
        Self {
            count: groups.len(),
            groups,
        }
    }
}

/// Response after deleting a duplicate
///
/// The delete itself succeeded whenever this is returned. When the reload
/// that follows fails, `reloaded` is false, `groups` is empty and
/// `reload_notice` carries the error to show next to the success notice.
#[derive(Debug, Serialize)]
pub struct DeleteDuplicateResponse {
    pub notice: Notice,
    pub groups: Vec<DuplicateGroup>,
    pub count: usize,
    pub reloaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload_notice: Option<Notice>,
}

/// Product listing
///
/// GET /products?categories=Kurta,Saree&sizes=M&max_price=2500&sort=price-low
pub async fn list_products(
    State(host): State<Arc<ServerHost>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Listing>, StorefrontError> {
    let products = host
        .products
        .list_products()
        .await
        .map_err(|e| StorefrontError::from_store("load products", e))?;

    let criteria = query.criteria(host.config.default_price_range);
    let sort = query.sort_mode(&host.config.default_sort);

    Ok(Json(Listing::build(&products, &criteria, sort)))
}

/// Selectable filter values
///
/// GET /products/facets
pub async fn product_facets(
    State(host): State<Arc<ServerHost>>,
) -> Result<Json<FacetOptions>, StorefrontError> {
    let products = host
        .products
        .list_products()
        .await
        .map_err(|e| StorefrontError::from_store("load products", e))?;

    Ok(Json(facet_options(&products)))
}

/// Brand showcase grid
///
/// GET /brands
pub async fn list_brands(
    State(host): State<Arc<ServerHost>>,
) -> Result<Json<Vec<BrandCard>>, StorefrontError> {
    let brands = host
        .brands
        .list_brands()
        .await
        .map_err(|e| StorefrontError::from_store("load brands", e))?;

    Ok(Json(showcase(&brands, &host.config.brand_images)))
}

/// Current identity and admin flag
///
/// GET /auth/session
pub async fn session(CurrentAuth(context): CurrentAuth) -> Json<SessionResponse> {
    Json(SessionResponse {
        is_admin: context.is_admin(),
        user: context.user().cloned(),
    })
}

/// End the session and send the browser to the login page
///
/// POST /auth/logout
///
/// Answers `303 See Other` to the login path. Browsers follow the redirect;
/// API clients also get a "Logged out" success notice in the body.
pub async fn logout(
    State(host): State<Arc<ServerHost>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StorefrontError> {
    host.sessions
        .sign_out(&headers)
        .await
        .map_err(|e| StorefrontError::from_store("log out", e))?;

    let notice = Notice::success("Logged out");
    tracing::info!(notice = %notice.message, "session signed out");
    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, host.config.login_path.clone())],
        Json(notice),
    ))
}

/// Duplicate preview
///
/// GET /admin/duplicates
pub async fn list_duplicates(
    State(host): State<Arc<ServerHost>>,
    AdminAuth(admin): AdminAuth,
) -> Result<Json<DuplicatesResponse>, StorefrontError> {
    let groups = host
        .cleaner()
        .preview()
        .await
        .map_err(|e| StorefrontError::from_store("load products", e))?;

    tracing::debug!(admin = %admin.uid, groups = groups.len(), "duplicate preview");
    Ok(Json(DuplicatesResponse::new(groups)))
}

/// Delete one product and return the recomputed groups
///
/// DELETE /admin/products/{id}
pub async fn delete_product(
    State(host): State<Arc<ServerHost>>,
    AdminAuth(admin): AdminAuth,
    Path(id): Path<String>,
) -> Result<Json<DeleteDuplicateResponse>, StorefrontError> {
    let outcome = host
        .cleaner()
        .delete_and_reload(&id)
        .await
        .map_err(|e| StorefrontError::from_store("delete product", e))?;

    tracing::info!(admin = %admin.uid, product_id = %id, "product deleted from duplicate tool");

    let (groups, reload_notice) = match outcome.reload {
        Ok(groups) => (groups, None),
        Err(e) => {
            let err = StorefrontError::from_store("reload products", e);
            (Vec::new(), Some(err.notice()))
        }
    };

    Ok(Json(DeleteDuplicateResponse {
        notice: Notice::success("Deleted"),
        count: groups.len(),
        reloaded: reload_notice.is_none(),
        reload_notice,
        groups,
    }))
}
