//! Server module for building the storefront HTTP server
//!
//! This module provides a `ServerBuilder` that wires the stores and auth
//! providers into a transport-agnostic `ServerHost`, and exposes it through
//! REST routes for the listing, brand grid, session and admin cleanup tools.

pub mod builder;
pub mod exposure;
pub mod extractors;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
