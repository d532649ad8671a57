//! In-memory implementation of OrderRepository for test isolation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{Order, OrderFilter, OrderStatus};
use crate::repository::OrderRepository;

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(order: &Order, vendor_id: Uuid, filter: &OrderFilter) -> bool {
        if order.vendor_id != vendor_id {
            return false;
        }
        if let Some(status) = filter.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(payment_status) = filter.payment_status {
            if order.payment_status != payment_status {
                return false;
            }
        }
        if let Some(from) = filter.from {
            if order.created_at < from {
                return false;
            }
        }
        if let Some(to) = filter.to {
            if order.created_at > to {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, order: Order) -> OrderResult<Order> {
        self.orders
            .write()
            .expect("order store poisoned")
            .insert(order.id, order.clone());
        Ok(order)
    }

    async fn get(&self, vendor_id: Uuid, order_id: Uuid) -> OrderResult<Option<Order>> {
        let orders = self.orders.read().expect("order store poisoned");
        Ok(orders
            .get(&order_id)
            .filter(|o| o.vendor_id == vendor_id)
            .cloned())
    }

    async fn list(&self, vendor_id: Uuid, filter: &OrderFilter) -> OrderResult<Vec<Order>> {
        let orders = self.orders.read().expect("order store poisoned");
        let mut matching: Vec<Order> = orders
            .values()
            .filter(|o| Self::matches(o, vendor_id, filter))
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

    async fn count(&self, vendor_id: Uuid, filter: &OrderFilter) -> OrderResult<u64> {
        let orders = self.orders.read().expect("order store poisoned");
        Ok(orders
            .values()
            .filter(|o| Self::matches(o, vendor_id, filter))
            .count() as u64)
    }

    async fn update_status(
        &self,
        vendor_id: Uuid,
        order_id: Uuid,
        status: OrderStatus,
        note: Option<String>,
    ) -> OrderResult<u64> {
        let mut orders = self.orders.write().expect("order store poisoned");
        match orders.get_mut(&order_id) {
            Some(order) if order.vendor_id == vendor_id => {
                order.set_status(status, note);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}
