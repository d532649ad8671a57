//! Vendor account routes
//!
//! Wires the vendors domain to HTTP routes with the MongoDB repository.

use axum::Router;
use domain_vendors::{handlers, MongoVendorRepository, VendorGate, VendorService};

use crate::state::AppState;

/// Create the vendor account router
pub fn router(state: &AppState) -> Router {
    let service = VendorService::new(
        MongoVendorRepository::new(state.db.clone()),
        state.jwt.clone(),
    );
    let gate = VendorGate::new(
        MongoVendorRepository::new(state.db.clone()),
        state.jwt.clone(),
    );

    handlers::router(service, gate)
}
