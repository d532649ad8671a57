//! Order service - vendor-scoped listing and the status update contract

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use axum_helpers::Pagination;

use crate::error::{OrderError, OrderResult};
use crate::models::{Order, OrderFilter, OrderStatus};
use crate::repository::OrderRepository;

pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List the vendor's orders with the pagination block
    #[instrument(skip(self, filter))]
    pub async fn list_orders(
        &self,
        vendor_id: Uuid,
        filter: OrderFilter,
    ) -> OrderResult<(Vec<Order>, Pagination)> {
        let total = self.repository.count(vendor_id, &filter).await?;
        let orders = self.repository.list(vendor_id, &filter).await?;
        let (page, limit) = filter.page_bounds();
        Ok((orders, Pagination::new(total, page, limit)))
    }

    /// Get one of the vendor's orders
    #[instrument(skip(self))]
    pub async fn get_order(&self, vendor_id: Uuid, order_id: Uuid) -> OrderResult<Order> {
        self.repository
            .get(vendor_id, order_id)
            .await?
            .ok_or(OrderError::NotFound)
    }

    /// Set an order's status to the supplied value.
    ///
    /// Two deliberate contract points, pinned by tests:
    /// - no transition validation: any status can follow any other;
    /// - an id that matches nothing (including another vendor's order)
    ///   is acknowledged as success without creating or mutating
    ///   anything.
    #[instrument(skip(self, note))]
    pub async fn update_status(
        &self,
        vendor_id: Uuid,
        order_id: Uuid,
        status: OrderStatus,
        note: Option<String>,
    ) -> OrderResult<()> {
        let matched = self
            .repository
            .update_status(vendor_id, order_id, status, note)
            .await?;

        if matched == 0 {
            tracing::debug!(%order_id, "Status update matched no order; acknowledged as no-op");
        }
        Ok(())
    }

    /// Count orders matching a filter; used by the dashboard
    #[instrument(skip(self, filter))]
    pub async fn count_orders(&self, vendor_id: Uuid, filter: &OrderFilter) -> OrderResult<u64> {
        self.repository.count(vendor_id, filter).await
    }
}

impl<R: OrderRepository> Clone for OrderService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
