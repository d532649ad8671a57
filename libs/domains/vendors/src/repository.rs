use async_trait::async_trait;
use uuid::Uuid;

use crate::error::VendorResult;
use crate::models::Vendor;

/// Repository trait for Vendor persistence.
///
/// Implementations must uphold the email uniqueness invariant: exactly
/// one vendor document per normalized (lowercase) email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Insert a new vendor
    async fn create(&self, vendor: Vendor) -> VendorResult<Vendor>;

    /// Get a vendor by ID
    async fn get_by_id(&self, id: Uuid) -> VendorResult<Option<Vendor>>;

    /// Get a vendor by normalized email
    async fn get_by_email(&self, email: &str) -> VendorResult<Option<Vendor>>;

    /// Check whether a normalized email is already registered
    async fn email_exists(&self, email: &str) -> VendorResult<bool>;

    /// Replace an existing vendor document
    async fn update(&self, vendor: Vendor) -> VendorResult<Vendor>;
}
