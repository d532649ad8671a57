//! MongoDB implementation of SupportRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::SupportResult;
use crate::models::{SupportTicket, TicketFilter};
use crate::repository::SupportRepository;

/// MongoDB implementation of the SupportRepository
pub struct MongoSupportRepository {
    collection: Collection<SupportTicket>,
}

impl MongoSupportRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<SupportTicket>("support_tickets");
        Self { collection }
    }

    /// Create the indexes this repository relies on
    pub async fn ensure_indexes(&self) -> SupportResult<()> {
        let by_id = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let by_vendor_status = IndexModel::builder()
            .keys(doc! { "vendor_id": 1, "status": 1 })
            .build();

        self.collection
            .create_indexes([by_id, by_vendor_status])
            .await?;
        Ok(())
    }

    fn build_filter(vendor_id: Uuid, filter: &TicketFilter) -> Document {
        let mut doc = doc! { "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null) };

        if let Some(ref status) = filter.status {
            doc.insert("status", status.to_string());
        }

        doc
    }
}

#[async_trait]
impl SupportRepository for MongoSupportRepository {
    #[instrument(skip(self, ticket), fields(ticket_id = %ticket.id, vendor_id = %ticket.vendor_id))]
    async fn create(&self, ticket: SupportTicket) -> SupportResult<SupportTicket> {
        self.collection.insert_one(&ticket).await?;

        tracing::info!(ticket_id = %ticket.id, "Support ticket created");
        Ok(ticket)
    }

    #[instrument(skip(self))]
    async fn get(&self, vendor_id: Uuid, ticket_id: Uuid) -> SupportResult<Option<SupportTicket>> {
        let filter = doc! {
            "id": to_bson(&ticket_id).unwrap_or(Bson::Null),
            "vendor_id": to_bson(&vendor_id).unwrap_or(Bson::Null),
        };
        let ticket = self.collection.find_one(filter).await?;
        Ok(ticket)
    }

    #[instrument(skip(self, filter))]
    async fn list(
        &self,
        vendor_id: Uuid,
        filter: &TicketFilter,
    ) -> SupportResult<Vec<SupportTicket>> {
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
        let tickets: Vec<SupportTicket> = cursor.try_collect().await?;

        Ok(tickets)
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, vendor_id: Uuid, filter: &TicketFilter) -> SupportResult<u64> {
        let mongo_filter = Self::build_filter(vendor_id, filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }
}
