//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create the indexes this repository relies on
    pub async fn ensure_indexes(&self) -> ProductResult<()> {
        let by_id = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let by_vendor_status = IndexModel::builder()
            .keys(doc! { "vendor_id": 1, "status": 1 })
            .build();
        let by_vendor_category = IndexModel::builder()
            .keys(doc! { "vendor_id": 1, "category": 1 })
            .build();

        self.collection
            .create_indexes([by_id, by_vendor_status, by_vendor_category])
            .await?;
        Ok(())
    }

    /// Build a MongoDB filter document, always scoped to the vendor
    fn build_filter(vendor_id: Uuid, filter: &ProductFilter) -> Document {
        let mut doc = doc! { "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null) };

        if let Some(ref category) = filter.category {
            doc.insert("category", category);
        }

        if let Some(ref status) = filter.status {
            doc.insert("status", status.to_string());
        }

        if filter.low_stock_only {
            doc.insert("$expr", doc! { "$lte": ["$stock", "$min_stock_threshold"] });
        }

        doc
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id, vendor_id = %product.vendor_id))]
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<Option<Product>> {
        let filter = doc! {
            "id": to_bson(&product_id).unwrap_or(Bson::Null),
            "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null),
        };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, vendor_id: Uuid, filter: &ProductFilter) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(vendor_id, filter);
        let (_, limit) = filter.page_bounds();

        let options = mongodb::options::FindOptions::builder()
            .limit(limit)
            .skip(filter.offset())
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, vendor_id: Uuid, filter: &ProductFilter) -> ProductResult<u64> {
        let mongo_filter = Self::build_filter(vendor_id, filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update(&self, product: Product) -> ProductResult<Product> {
        let filter = doc! {
            "id": to_bson(&product.id).unwrap_or(Bson::Null),
            "vendor_id": to_bson(&product.vendor_id).unwrap_or(Bson::Null),
        };
        let result = self.collection.replace_one(filter, &product).await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound);
        }

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, vendor_id: Uuid, product_id: Uuid) -> ProductResult<bool> {
        let filter = doc! {
            "id": to_bson(&product_id).unwrap_or(Bson::Null),
            "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null),
        };
        let result = self.collection.delete_one(filter).await?;

        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn categories(&self, vendor_id: Uuid) -> ProductResult<Vec<String>> {
        let filter = doc! { "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null) };
        let values = self.collection.distinct("category", filter).await?;

        Ok(values
            .iter()
            .filter_map(|v| v.as_str().map(|s| s.to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;

    #[test]
    fn test_build_filter_always_scopes_by_vendor() {
        let vendor_id = Uuid::new_v4();
        let doc = MongoProductRepository::build_filter(vendor_id, &ProductFilter::default());
        assert!(doc.contains_key("vendor_id"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_build_filter_with_status_and_category() {
        let filter = ProductFilter {
            category: Some("Sebze".to_string()),
            status: Some(ProductStatus::Active),
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(Uuid::new_v4(), &filter);
        assert_eq!(doc.get_str("category").unwrap(), "Sebze");
        assert_eq!(doc.get_str("status").unwrap(), "active");
    }

    #[test]
    fn test_build_filter_low_stock_uses_expr() {
        let filter = ProductFilter {
            low_stock_only: true,
            ..Default::default()
        };
        let doc = MongoProductRepository::build_filter(Uuid::new_v4(), &filter);
        assert!(doc.contains_key("$expr"));
    }
}
