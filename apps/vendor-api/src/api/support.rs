//! Support ticket routes
//!
//! Wires the support domain to HTTP routes with the MongoDB repository.

use axum::Router;
use domain_support::{handlers, MongoSupportRepository, SupportService};
use domain_vendors::{MongoVendorRepository, VendorGate};

use crate::state::AppState;

/// Create the support router
pub fn router(state: &AppState) -> Router {
    let service = SupportService::new(MongoSupportRepository::new(state.db.clone()));
    let gate = VendorGate::new(
        MongoVendorRepository::new(state.db.clone()),
        state.jwt.clone(),
    );

    handlers::router(service, gate)
}
