//! Order domain: vendor-scoped order listing and status updates.
//!
//! Orders are created by an external process (the marketplace checkout);
//! this service only lists them and mutates their `status`. The status
//! update deliberately validates no transition graph and acknowledges
//! updates to unknown order ids without failing.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryOrderRepository;
pub use models::{
    CustomerInfo, Order, OrderFilter, OrderItem, OrderStatus, PaymentStatus, StatusHistoryEntry,
    UpdateOrderStatus,
};
pub use mongodb::MongoOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;
