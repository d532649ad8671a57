//! In-memory implementation of ProductRepository for test isolation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter};
use crate::repository::ProductRepository;

#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(product: &Product, vendor_id: Uuid, filter: &ProductFilter) -> bool {
        if product.vendor_id != vendor_id {
            return false;
        }
        if let Some(ref category) = filter.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(status) = filter.status {
            if product.status != status {
                return false;
            }
        }
        if filter.low_stock_only && !product.is_low_stock() {
            return false;
        }
        true
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.products
            .write()
            .expect("product store poisoned")
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn get(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().expect("product store poisoned");
        Ok(products
            .get(&product_id)
            .filter(|p| p.vendor_id == vendor_id)
            .cloned())
    }

    async fn list(&self, vendor_id: Uuid, filter: &ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().expect("product store poisoned");
        let mut matching: Vec<Product> = products
            .values()
            .filter(|p| Self::matches(p, vendor_id, filter))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let (_, limit) = filter.page_bounds();
        Ok(matching
            .into_iter()
            .skip(filter.offset() as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, vendor_id: Uuid, filter: &ProductFilter) -> ProductResult<u64> {
        let products = self.products.read().expect("product store poisoned");
        Ok(products
            .values()
            .filter(|p| Self::matches(p, vendor_id, filter))
            .count() as u64)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().expect("product store poisoned");
        match products.get(&product.id) {
            Some(existing) if existing.vendor_id == product.vendor_id => {
                products.insert(product.id, product.clone());
                Ok(product)
            }
            _ => Err(ProductError::NotFound),
        }
    }

    async fn delete(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().expect("product store poisoned");
        match products.get(&product_id) {
            Some(existing) if existing.vendor_id == vendor_id => {
                products.remove(&product_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn categories(&self, vendor_id: Uuid) -> ProductResult<Vec<String>> {
        let products = self.products.read().expect("product store poisoned");
        let mut categories: Vec<String> = products
            .values()
            .filter(|p| p.vendor_id == vendor_id)
            .map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
