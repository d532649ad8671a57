//! API routes module
//!
//! Wires the domain routers into the `/api` tree and owns the startup
//! index bootstrap.

pub mod dashboard;
pub mod health;
pub mod orders;
pub mod products;
pub mod support;
pub mod vendors;

use axum::{routing::get, Json, Router};
use axum_helpers::ApiResponse;
use domain_orders::MongoOrderRepository;
use domain_products::MongoProductRepository;
use domain_support::MongoSupportRepository;
use domain_vendors::MongoVendorRepository;
use tracing::info;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    let vendor_routes = Router::new()
        .merge(vendors::router(state))
        .nest("/products", products::router(state))
        .nest("/orders", orders::router(state))
        .nest("/support", support::router(state))
        .nest("/dashboard", dashboard::router(state));

    Router::new()
        .nest("/vendor", vendor_routes)
        .route("/", get(api_root))
        .merge(health::router(state.clone()))
}

/// Create the indexes every collection relies on
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    MongoVendorRepository::new(db.clone()).ensure_indexes().await?;
    MongoProductRepository::new(db.clone()).ensure_indexes().await?;
    MongoOrderRepository::new(db.clone()).ensure_indexes().await?;
    MongoSupportRepository::new(db.clone()).ensure_indexes().await?;

    info!("Collection indexes created");
    Ok(())
}

/// API root banner
async fn api_root() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok(format!(
        "Satıcı Paneli API v{}",
        env!("CARGO_PKG_VERSION")
    )))
}
