//! Request extractors resolving the caller's auth context

use crate::core::{AuthContext, AuthPolicy, SessionUser, StorefrontError};
use crate::server::host::ServerHost;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::sync::Arc;

/// Auth context of the caller, anonymous when there is no session
#[derive(Debug, Clone)]
pub struct CurrentAuth(pub AuthContext);

impl FromRequestParts<Arc<ServerHost>> for CurrentAuth {
    type Rejection = StorefrontError;

    async fn from_request_parts(
        parts: &mut Parts,
        host: &Arc<ServerHost>,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentAuth(host.auth_context(&parts.headers).await))
    }
}

/// A signed-in admin; rejects everyone else
///
/// Anonymous callers get `401`, signed-in non-admins `403`.
#[derive(Debug, Clone)]
pub struct AdminAuth(pub SessionUser);

impl FromRequestParts<Arc<ServerHost>> for AdminAuth {
    type Rejection = StorefrontError;

    async fn from_request_parts(
        parts: &mut Parts,
        host: &Arc<ServerHost>,
    ) -> Result<Self, Self::Rejection> {
        let context = host.auth_context(&parts.headers).await;

        if !AuthPolicy::Authenticated.check(&context) {
            return Err(StorefrontError::Unauthorized);
        }
        if !AuthPolicy::AdminOnly.check(&context) {
            return Err(StorefrontError::Forbidden);
        }

        match context {
            AuthContext::Admin { user } => Ok(AdminAuth(user)),
            _ => Err(StorefrontError::Forbidden),
        }
    }
}
