//! Application state shared by all request handlers.

use axum_helpers::JwtAuth;
use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned per router (inexpensive handle clones). Domain routers build
/// their repositories from the database handle; the JWT signer is shared
/// so the login service and every gate verify against the same secret.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares the underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Stateless JWT issuer/verifier
    pub jwt: JwtAuth,
}
