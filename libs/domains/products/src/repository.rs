use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter};

/// Repository trait for Product persistence.
///
/// Every operation except `create` takes the owning vendor's id and must
/// scope its query by it; implementations never expose another vendor's
/// documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Get one product by id, scoped to the vendor
    async fn get(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<Option<Product>>;

    /// List products matching the filter, newest first
    async fn list(&self, vendor_id: Uuid, filter: &ProductFilter) -> ProductResult<Vec<Product>>;

    /// Count products matching the filter (pagination ignored)
    async fn count(&self, vendor_id: Uuid, filter: &ProductFilter) -> ProductResult<u64>;

    /// Replace an existing product document
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Delete one product by id, scoped to the vendor; false when no
    /// document matched
    async fn delete(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<bool>;

    /// Distinct categories used by the vendor's products
    async fn categories(&self, vendor_id: Uuid) -> ProductResult<Vec<String>>;
}
