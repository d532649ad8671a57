use async_trait::async_trait;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{Order, OrderFilter, OrderStatus};

/// Repository trait for Order persistence.
///
/// Orders enter storage through the external checkout process; `insert`
/// exists for that integration and for test seeding, not for any
/// vendor-facing route.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order document
    async fn insert(&self, order: Order) -> OrderResult<Order>;

    /// Get one order by id, scoped to the vendor
    async fn get(&self, vendor_id: Uuid, order_id: Uuid) -> OrderResult<Option<Order>>;

    /// List orders matching the filter, newest first
    async fn list(&self, vendor_id: Uuid, filter: &OrderFilter) -> OrderResult<Vec<Order>>;

    /// Count orders matching the filter (pagination ignored)
    async fn count(&self, vendor_id: Uuid, filter: &OrderFilter) -> OrderResult<u64>;

    /// Set the status of one order and append to its history.
    ///
    /// Returns the number of matched documents: 0 when no order with
    /// this id belongs to the vendor. Callers decide whether 0 is an
    /// error; the status update endpoint deliberately treats it as
    /// success.
    async fn update_status(
        &self,
        vendor_id: Uuid,
        order_id: Uuid,
        status: OrderStatus,
        note: Option<String>,
    ) -> OrderResult<u64>;
}
