//! Order routes
//!
//! Wires the orders domain to HTTP routes with the MongoDB repository.

use axum::Router;
use domain_orders::{handlers, MongoOrderRepository, OrderService};
use domain_vendors::{MongoVendorRepository, VendorGate};

use crate::state::AppState;

/// Create the orders router
pub fn router(state: &AppState) -> Router {
    let service = OrderService::new(MongoOrderRepository::new(state.db.clone()));
    let gate = VendorGate::new(
        MongoVendorRepository::new(state.db.clone()),
        state.jwt.clone(),
    );

    handlers::router(service, gate)
}
