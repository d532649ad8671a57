//! In-memory implementation of SupportRepository for test isolation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::SupportResult;
use crate::models::{SupportTicket, TicketFilter};
use crate::repository::SupportRepository;

#[derive(Clone, Default)]
pub struct InMemorySupportRepository {
    tickets: Arc<RwLock<HashMap<Uuid, SupportTicket>>>,
}

impl InMemorySupportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(ticket: &SupportTicket, vendor_id: Uuid, filter: &TicketFilter) -> bool {
        if ticket.vendor_id != vendor_id {
            return false;
        }
        if let Some(status) = filter.status {
            if ticket.status != status {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl SupportRepository for InMemorySupportRepository {
    async fn create(&self, ticket: SupportTicket) -> SupportResult<SupportTicket> {
        self.tickets
            .write()
            .expect("ticket store poisoned")
            .insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn get(&self, vendor_id: Uuid, ticket_id: Uuid) -> SupportResult<Option<SupportTicket>> {
        let tickets = self.tickets.read().expect("ticket store poisoned");
        Ok(tickets
            .get(&ticket_id)
            .filter(|t| t.vendor_id == vendor_id)
            .cloned())
    }

    async fn list(
        &self,
        vendor_id: Uuid,
        filter: &TicketFilter,
    ) -> SupportResult<Vec<SupportTicket>> {
        let tickets = self.tickets.read().expect("ticket store poisoned");
        let mut matching: Vec<SupportTicket> = tickets
            .values()
            .filter(|t| Self::matches(t, vendor_id, filter))
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

    async fn count(&self, vendor_id: Uuid, filter: &TicketFilter) -> SupportResult<u64> {
        let tickets = self.tickets.read().expect("ticket store poisoned");
        Ok(tickets
            .values()
            .filter(|t| Self::matches(t, vendor_id, filter))
            .count() as u64)
    }
}
