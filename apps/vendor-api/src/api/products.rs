//! Product routes
//!
//! Wires the products domain to HTTP routes with the MongoDB repository.

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductService};
use domain_vendors::{MongoVendorRepository, VendorGate};

use crate::state::AppState;

/// Create the products router
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(MongoProductRepository::new(state.db.clone()));
    let gate = VendorGate::new(
        MongoVendorRepository::new(state.db.clone()),
        state.jwt.clone(),
    );

    handlers::router(service, gate)
}
