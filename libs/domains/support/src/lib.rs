//! Support domain: vendor support tickets.
//!
//! Tickets only require authentication, not approval: a rejected or
//! suspended vendor still needs a channel to reach the support team.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{SupportError, SupportResult};
pub use handlers::ApiDoc;
pub use memory::InMemorySupportRepository;
pub use models::{CreateTicket, SupportTicket, TicketCategory, TicketFilter, TicketStatus};
pub use mongodb::MongoSupportRepository;
pub use repository::SupportRepository;
pub use service::SupportService;
