//! Vendor domain: account lifecycle, credentials, and the request gate.
//!
//! A vendor account starts in `pending_review` and is moved to
//! `approved`, `rejected`, or `suspended` by an external administrative
//! process directly on storage; no transition endpoint exists here. The
//! [`gate::VendorGate`] resolves bearer tokens to vendor records and
//! enforces the approval precondition for business operations.

pub mod error;
pub mod gate;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{status_gate_message, VendorError, VendorResult};
pub use gate::VendorGate;
pub use handlers::ApiDoc;
pub use memory::InMemoryVendorRepository;
pub use models::{
    Address, Documents, LoginData, RegisterVendor, UpdateVendorProfile, Vendor, VendorLogin,
    VendorProfile, VendorStatus, VendorSummary,
};
pub use mongodb::MongoVendorRepository;
pub use repository::VendorRepository;
pub use service::VendorService;
