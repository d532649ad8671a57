//! Product domain: vendor-scoped product catalog.
//!
//! Every read, write, and delete is filtered by the owning vendor's id;
//! a product that belongs to another vendor is indistinguishable from a
//! missing one (404, never 403).

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{CreateProduct, Pagination, Product, ProductFilter, ProductStatus, UpdateProduct};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
