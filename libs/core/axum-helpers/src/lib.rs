//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for the vendor panel
//! Axum services.
//!
//! ## Modules
//!
//! - **[`auth`]**: stateless JWT access/refresh tokens with a kind discriminator
//! - **[`envelope`]**: the `{"success": bool, "data"?, "message"?}` response shape
//! - **[`errors`]**: the shared [`AppError`] type and the localized message catalog
//! - **[`extractors`]**: bearer token and validated JSON extractors
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly, OpenAPI docs, health endpoints, graceful shutdown

pub mod auth;
pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{
    Claims, JwtAuth, JwtConfig, TokenKind, ACCESS_TOKEN_TTL_SECS, REFRESH_TOKEN_TTL_SECS,
};

// Re-export the response envelope
pub use envelope::{ApiResponse, Pagination};

// Re-export error types
pub use errors::{messages, AppError, ErrorBody};

// Re-export extractors
pub use extractors::{Bearer, ValidatedJson};

// Re-export HTTP middleware
pub use http::{create_cors_layer, security_headers};

// Re-export server helpers
pub use server::{create_app, create_router, health_router, shutdown_signal};
