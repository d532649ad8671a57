//! MongoDB implementation of VendorRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{VendorError, VendorResult};
use crate::models::Vendor;
use crate::repository::VendorRepository;

/// MongoDB implementation of the VendorRepository
pub struct MongoVendorRepository {
    collection: Collection<Vendor>,
}

impl MongoVendorRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Vendor>("vendors");
        Self { collection }
    }

    /// Create the indexes this repository relies on.
    ///
    /// The unique email index backs the one-vendor-per-email invariant at
    /// the storage level; the application-level existence check remains
    /// the user-facing path.
    pub async fn ensure_indexes(&self) -> VendorResult<()> {
        let email_unique = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let by_status = IndexModel::builder().keys(doc! { "status": 1 }).build();

        self.collection
            .create_indexes([email_unique, by_status])
            .await?;
        Ok(())
    }
}

#[async_trait]
impl VendorRepository for MongoVendorRepository {
    #[instrument(skip(self, vendor), fields(vendor_id = %vendor.id))]
    async fn create(&self, vendor: Vendor) -> VendorResult<Vendor> {
        self.collection.insert_one(&vendor).await?;

        tracing::info!(vendor_id = %vendor.id, "Vendor created");
        Ok(vendor)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> VendorResult<Option<Vendor>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let vendor = self.collection.find_one(filter).await?;
        Ok(vendor)
    }

    #[instrument(skip(self, email))]
    async fn get_by_email(&self, email: &str) -> VendorResult<Option<Vendor>> {
        let vendor = self.collection.find_one(doc! { "email": email }).await?;
        Ok(vendor)
    }

    #[instrument(skip(self, email))]
    async fn email_exists(&self, email: &str) -> VendorResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "email": email })
            .await?;
        Ok(count > 0)
    }

    #[instrument(skip(self, vendor), fields(vendor_id = %vendor.id))]
    async fn update(&self, vendor: Vendor) -> VendorResult<Vendor> {
        let filter = doc! { "_id": to_bson(&vendor.id).unwrap_or(Bson::Null) };
        let result = self.collection.replace_one(filter, &vendor).await?;

        if result.matched_count == 0 {
            return Err(VendorError::UnknownVendor);
        }

        tracing::info!(vendor_id = %vendor.id, "Vendor updated");
        Ok(vendor)
    }
}
