use async_trait::async_trait;
use uuid::Uuid;

use crate::error::SupportResult;
use crate::models::{SupportTicket, TicketFilter};

/// Repository trait for SupportTicket persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupportRepository: Send + Sync {
    /// Insert a new ticket
    async fn create(&self, ticket: SupportTicket) -> SupportResult<SupportTicket>;

    /// Get one ticket by id, scoped to the vendor
    async fn get(&self, vendor_id: Uuid, ticket_id: Uuid) -> SupportResult<Option<SupportTicket>>;

    /// List tickets matching the filter, newest first
    async fn list(
        &self,
        vendor_id: Uuid,
        filter: &TicketFilter,
    ) -> SupportResult<Vec<SupportTicket>>;

    /// Count tickets matching the filter (pagination ignored)
    async fn count(&self, vendor_id: Uuid, filter: &TicketFilter) -> SupportResult<u64>;
}
