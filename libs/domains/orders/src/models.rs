use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

pub use axum_helpers::Pagination;

/// Order fulfillment status.
///
/// Unknown strings are rejected when a payload is deserialized; beyond
/// membership there is no transition validation (see the status update
/// operation).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OnTheWay,
    Delivered,
    Cancelled,
}

/// Payment status, set by the external checkout process
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Failed,
}

/// Customer details attached to an order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
}

/// One line item of an order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub name: String,
    pub unit: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// One entry of the status audit trail
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusHistoryEntry {
    pub status: OrderStatus,
    pub changed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Order entity - stored in MongoDB and returned to clients as-is.
///
/// Like products, the application `id` is a plain field; the driver's
/// `_id` never enters this type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub vendor_id: Uuid,
    /// Human-facing order reference, e.g. "ORD-20260805-0042"
    pub order_number: String,
    pub customer_info: CustomerInfo,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    pub total: f64,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    #[serde(default)]
    pub status_history: Vec<StatusHistoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for the status update operation
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrderStatus {
    pub status: OrderStatus,
    pub note: Option<String>,
}

/// Query filters for listing orders
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct OrderFilter {
    /// Filter by fulfillment status
    pub status: Option<OrderStatus>,
    /// Filter by payment status
    pub payment_status: Option<PaymentStatus>,
    /// Orders created at or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Orders created at or before this instant
    pub to: Option<DateTime<Utc>>,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size (bounded)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    50
}

const MAX_LIMIT: i64 = 100;

impl OrderFilter {
    /// Filter on fulfillment status only; used by the dashboard
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Filter on creation time only; used by the dashboard
    pub fn created_since(from: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            ..Default::default()
        }
    }

    /// Clamp pagination into sane bounds.
    pub fn page_bounds(&self) -> (i64, i64) {
        let limit = self.limit.clamp(1, MAX_LIMIT);
        let page = self.page.max(1);
        (page, limit)
    }

    /// Documents to skip for the current page.
    pub fn offset(&self) -> u64 {
        let (page, limit) = self.page_bounds();
        ((page - 1) * limit) as u64
    }
}

impl Order {
    /// Set the status unconditionally and append to the audit trail.
    ///
    /// There is deliberately no transition validation: any member of
    /// [`OrderStatus`] is accepted from any current status.
    pub fn set_status(&mut self, status: OrderStatus, note: Option<String>) {
        self.status = status;
        self.status_history.push(StatusHistoryEntry {
            status,
            changed_at: Utc::now(),
            note,
        });
        self.updated_at = Utc::now();
    }
}
