//! Session and admin-privilege resolution
//!
//! Identity comes from a [`SessionProvider`]; the admin flag is looked up
//! separately through an [`AdminResolver`] backed by the user documents of
//! the store. Resolution fails closed: any lookup error means "not admin",
//! and a broken session lookup means anonymous.

use anyhow::Result;
use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the session provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Authorization context resolved for a request
#[derive(Debug, Clone, PartialEq)]
pub enum AuthContext {
    /// Signed-in user without admin privileges
    User { user: SessionUser },

    /// Signed-in user whose document carries the admin flag
    Admin { user: SessionUser },

    /// No session
    Anonymous,
}

impl AuthContext {
    /// Check if context represents an admin
    pub fn is_admin(&self) -> bool {
        matches!(self, AuthContext::Admin { .. })
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthContext::User { user } | AuthContext::Admin { user } => Some(user),
            AuthContext::Anonymous => None,
        }
    }
}

/// Authorization policy for an operation
#[derive(Debug, Clone)]
pub enum AuthPolicy {
    /// Public access (no auth required)
    Public,

    /// Any signed-in user
    Authenticated,

    /// Admin only
    AdminOnly,
}

impl AuthPolicy {
    /// Check if auth context satisfies this policy
    pub fn check(&self, context: &AuthContext) -> bool {
        match self {
            AuthPolicy::Public => true,
            AuthPolicy::Authenticated => !matches!(context, AuthContext::Anonymous),
            AuthPolicy::AdminOnly => context.is_admin(),
        }
    }
}

/// Supplies the current identity and ends sessions
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Identity attached to the request, if any
    async fn current_user(&self, headers: &HeaderMap) -> Result<Option<SessionUser>>;

    /// Clear the session attached to the request
    async fn sign_out(&self, headers: &HeaderMap) -> Result<()>;
}

/// Looks up the admin flag of a user
#[async_trait]
pub trait AdminResolver: Send + Sync {
    async fn is_admin(&self, uid: &str) -> Result<bool>;
}

/// Default provider: nobody is signed in and nobody is an admin
pub struct NoAuthProvider;

#[async_trait]
impl SessionProvider for NoAuthProvider {
    async fn current_user(&self, _headers: &HeaderMap) -> Result<Option<SessionUser>> {
        Ok(None)
    }

    async fn sign_out(&self, _headers: &HeaderMap) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl AdminResolver for NoAuthProvider {
    async fn is_admin(&self, _uid: &str) -> Result<bool> {
        Ok(false)
    }
}

/// Bearer token from the `Authorization` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve the admin flag, treating every failure as "not admin"
pub async fn resolve_admin(resolver: &dyn AdminResolver, uid: &str) -> bool {
    match resolver.is_admin(uid).await {
        Ok(is_admin) => is_admin,
        Err(e) => {
            tracing::warn!(uid = %uid, error = %e, "admin lookup failed, treating user as non-admin");
            false
        }
    }
}

/// Resolve the full auth context of a request
pub async fn resolve_context(
    sessions: &dyn SessionProvider,
    admins: &dyn AdminResolver,
    headers: &HeaderMap,
) -> AuthContext {
    let user = match sessions.current_user(headers).await {
        Ok(Some(user)) => user,
        Ok(None) => return AuthContext::Anonymous,
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed, treating request as anonymous");
            return AuthContext::Anonymous;
        }
    };

    if resolve_admin(admins, &user.uid).await {
        AuthContext::Admin { user }
    } else {
        AuthContext::User { user }
    }
}
