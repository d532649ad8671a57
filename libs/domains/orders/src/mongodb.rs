//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{Order, OrderFilter, OrderStatus, StatusHistoryEntry};
use crate::repository::OrderRepository;

/// MongoDB implementation of the OrderRepository
pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Order>("orders");
        Self { collection }
    }

    /// Create the indexes this repository relies on
    pub async fn ensure_indexes(&self) -> OrderResult<()> {
        let by_id = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let by_vendor_status = IndexModel::builder()
            .keys(doc! { "vendor_id": 1, "status": 1 })
            .build();
        let by_vendor_created = IndexModel::builder()
            .keys(doc! { "vendor_id": 1, "created_at": -1 })
            .build();

        self.collection
            .create_indexes([by_id, by_vendor_status, by_vendor_created])
            .await?;
        Ok(())
    }

    /// Build a MongoDB filter document, always scoped to the vendor
    fn build_filter(vendor_id: Uuid, filter: &OrderFilter) -> Document {
        let mut doc = doc! { "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null) };

        if let Some(ref status) = filter.status {
            doc.insert("status", status.to_string());
        }

        if let Some(ref payment_status) = filter.payment_status {
            doc.insert("payment_status", payment_status.to_string());
        }

        if filter.from.is_some() || filter.to.is_some() {
            let mut range = doc! {};
            if let Some(ref from) = filter.from {
                range.insert("$gte", to_bson(from).unwrap_or(Bson::Null));
            }
            if let Some(ref to) = filter.to {
                range.insert("$lte", to_bson(to).unwrap_or(Bson::Null));
            }
            doc.insert("created_at", range);
        }

        doc
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, order), fields(order_id = %order.id, vendor_id = %order.vendor_id))]
    async fn insert(&self, order: Order) -> OrderResult<Order> {
        self.collection.insert_one(&order).await?;
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn get(&self, vendor_id: Uuid, order_id: Uuid) -> OrderResult<Option<Order>> {
        let filter = doc! {
            "id": to_bson(&order_id).unwrap_or(Bson::Null),
            "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null),
        };
        let order = self.collection.find_one(filter).await?;
        Ok(order)
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, vendor_id: Uuid, filter: &OrderFilter) -> OrderResult<Vec<Order>> {
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
        let orders: Vec<Order> = cursor.try_collect().await?;

        Ok(orders)
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, vendor_id: Uuid, filter: &OrderFilter) -> OrderResult<u64> {
        let mongo_filter = Self::build_filter(vendor_id, filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }

    #[instrument(skip(self, note))]
    async fn update_status(
        &self,
        vendor_id: Uuid,
        order_id: Uuid,
        status: OrderStatus,
        note: Option<String>,
    ) -> OrderResult<u64> {
        let filter = doc! {
            "id": to_bson(&order_id).unwrap_or(Bson::Null),
            "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null),
        };

        let history_entry = StatusHistoryEntry {
            status,
            changed_at: Utc::now(),
            note,
        };

        let update = doc! {
            "$set": {
                "status": status.to_string(),
                "updated_at": to_bson(&Utc::now()).unwrap_or(Bson::Null),
            },
            "$push": {
                "status_history": to_bson(&history_entry).unwrap_or(Bson::Null),
            },
        };

        let result = self.collection.update_one(filter, update).await?;

        tracing::info!(%order_id, matched = result.matched_count, "Order status update applied");
        Ok(result.matched_count)
    }
}
