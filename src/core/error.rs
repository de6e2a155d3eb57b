//! Typed errors for the storefront service
//!
//! Store traits return `anyhow::Result` so backends can attach context
//! freely. At the HTTP boundary those errors are folded into
//! [`StorefrontError`], which knows its status code, a stable error code for
//! clients, and the notice to show the user.
//!
//! Malformed record fields are never errors: they are defaulted while
//! decoding (see [`crate::core::product`]). Admin lookups never surface
//! errors either: they fail closed to "not admin".
//!
//! # Example
//!
//! ```rust,ignore
//! match cleaner.delete_and_reload(&id).await {
//!     Ok(outcome) => render(outcome.reload),
//!     Err(err) => match StorefrontError::from_store("delete product", err) {
//!         StorefrontError::NotFound { id } => println!("{id} is already gone"),
//!         other => eprintln!("{}", other),
//!     },
//! }
//! ```

use crate::core::notice::Notice;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The main error type of the storefront service
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// The product does not exist in the store
    #[error("product with id '{id}' not found")]
    NotFound { id: String },

    /// No signed-in user
    #[error("authentication required")]
    Unauthorized,

    /// Signed in, but without admin privileges
    #[error("admin privileges required")]
    Forbidden,

    /// The external store failed (network, permission, decoding)
    #[error("storage error during {operation}: {message}")]
    Storage { operation: String, message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal errors (should not happen in normal operation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Message meant for a transient UI notification
    pub notice: Notice,
}

impl StorefrontError {
    pub fn storage(operation: impl Into<String>, message: impl ToString) -> Self {
        StorefrontError::Storage {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    /// Fold an error returned by a store into a typed error
    ///
    /// Backends signal typed conditions (such as a missing record) by
    /// returning a `StorefrontError` inside the `anyhow::Error`; anything
    /// else becomes [`StorefrontError::Storage`].
    pub fn from_store(operation: &str, err: anyhow::Error) -> Self {
        match err.downcast::<StorefrontError>() {
            Ok(typed) => typed,
            Err(other) => Self::storage(operation, format!("{:#}", other)),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorefrontError::NotFound { .. } => StatusCode::NOT_FOUND,
            StorefrontError::Unauthorized => StatusCode::UNAUTHORIZED,
            StorefrontError::Forbidden => StatusCode::FORBIDDEN,
            StorefrontError::Storage { .. } => StatusCode::BAD_GATEWAY,
            StorefrontError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StorefrontError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StorefrontError::NotFound { .. } => "PRODUCT_NOT_FOUND",
            StorefrontError::Unauthorized => "UNAUTHORIZED",
            StorefrontError::Forbidden => "FORBIDDEN",
            StorefrontError::Storage { .. } => "STORAGE_ERROR",
            StorefrontError::Config(_) => "CONFIG_ERROR",
            StorefrontError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The notification shown to the user for this error
    pub fn notice(&self) -> Notice {
        match self {
            StorefrontError::NotFound { .. } => Notice::error("Product no longer exists"),
            StorefrontError::Unauthorized => Notice::error("Please sign in to continue"),
            StorefrontError::Forbidden => Notice::error("Only admins can do that"),
            StorefrontError::Storage { operation, .. } => {
                Notice::error(format!("Failed to {}", operation))
            }
            StorefrontError::Config(_) | StorefrontError::Internal(_) => {
                Notice::error("Something went wrong")
            }
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            notice: self.notice(),
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
