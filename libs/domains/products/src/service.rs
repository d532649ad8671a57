//! Product service - vendor-scoped catalog operations

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Pagination, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product owned by the vendor; id and timestamps are
    /// stamped here, supplied fields are stored verbatim.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(
        &self,
        vendor_id: Uuid,
        input: CreateProduct,
    ) -> ProductResult<Product> {
        let product = Product::new(vendor_id, input);
        self.repository.create(product).await
    }

    /// List the vendor's products with the pagination block
    #[instrument(skip(self, filter))]
    pub async fn list_products(
        &self,
        vendor_id: Uuid,
        filter: ProductFilter,
    ) -> ProductResult<(Vec<Product>, Pagination)> {
        let total = self.repository.count(vendor_id, &filter).await?;
        let products = self.repository.list(vendor_id, &filter).await?;
        let (page, limit) = filter.page_bounds();
        Ok((products, Pagination::new(total, page, limit)))
    }

    /// Get one of the vendor's products
    #[instrument(skip(self))]
    pub async fn get_product(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<Product> {
        self.repository
            .get(vendor_id, product_id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Partially update one of the vendor's products
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        vendor_id: Uuid,
        product_id: Uuid,
        update: UpdateProduct,
    ) -> ProductResult<Product> {
        let mut product = self.get_product(vendor_id, product_id).await?;
        product.apply_update(update);
        self.repository.update(product).await
    }

    /// Flip a product between active and inactive
    #[instrument(skip(self))]
    pub async fn toggle_status(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<Product> {
        let mut product = self.get_product(vendor_id, product_id).await?;
        product.toggle_status();
        self.repository.update(product).await
    }

    /// Delete one of the vendor's products.
    ///
    /// A product owned by another vendor is reported as NotFound, not
    /// Forbidden, so ids cannot be probed for existence.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<()> {
        let deleted = self.repository.delete(vendor_id, product_id).await?;

        if !deleted {
            return Err(ProductError::NotFound);
        }

        tracing::info!(%product_id, "Product deleted");
        Ok(())
    }

    /// Distinct categories in use by the vendor
    #[instrument(skip(self))]
    pub async fn categories(&self, vendor_id: Uuid) -> ProductResult<Vec<String>> {
        self.repository.categories(vendor_id).await
    }

    /// Count products matching a filter; used by the dashboard
    #[instrument(skip(self, filter))]
    pub async fn count_products(
        &self,
        vendor_id: Uuid,
        filter: &ProductFilter,
    ) -> ProductResult<u64> {
        self.repository.count(vendor_id, filter).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
