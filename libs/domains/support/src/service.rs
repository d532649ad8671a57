//! Support service - ticket creation and listing

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use axum_helpers::Pagination;

use crate::error::{SupportError, SupportResult};
use crate::models::{CreateTicket, SupportTicket, TicketFilter};
use crate::repository::SupportRepository;

pub struct SupportService<R: SupportRepository> {
    repository: Arc<R>,
}

impl<R: SupportRepository> SupportService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Open a ticket for the vendor
    #[instrument(skip(self, input), fields(subject = %input.subject))]
    pub async fn create_ticket(
        &self,
        vendor_id: Uuid,
        input: CreateTicket,
    ) -> SupportResult<SupportTicket> {
        let ticket = SupportTicket::new(vendor_id, input);
        self.repository.create(ticket).await
    }

    /// List the vendor's tickets with the pagination block
    #[instrument(skip(self, filter))]
    pub async fn list_tickets(
        &self,
        vendor_id: Uuid,
        filter: TicketFilter,
    ) -> SupportResult<(Vec<SupportTicket>, Pagination)> {
        let total = self.repository.count(vendor_id, &filter).await?;
        let tickets = self.repository.list(vendor_id, &filter).await?;
        let (page, limit) = filter.page_bounds();
        Ok((tickets, Pagination::new(total, page, limit)))
    }

    /// Get one of the vendor's tickets
    #[instrument(skip(self))]
    pub async fn get_ticket(
        &self,
        vendor_id: Uuid,
        ticket_id: Uuid,
    ) -> SupportResult<SupportTicket> {
        self.repository
            .get(vendor_id, ticket_id)
            .await?
            .ok_or(SupportError::NotFound)
    }
}

impl<R: SupportRepository> Clone for SupportService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
