use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

pub use axum_helpers::Pagination;

/// Support ticket category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TicketCategory {
    Technical,
    Payment,
    Account,
    Other,
}

/// Support ticket status; closed by the support team, not the vendor
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
pub enum TicketStatus {
    #[default]
    Open,
    Closed,
}

/// Support ticket entity - stored in MongoDB and returned as-is
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SupportTicket {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub subject: String,
    pub category: TicketCategory,
    pub message: String,
    pub status: TicketStatus,
    /// Reply from the support team, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for opening a ticket
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTicket {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    pub category: TicketCategory,
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
}

/// Query filters for listing tickets
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct TicketFilter {
    /// Filter by status
    pub status: Option<TicketStatus>,
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
    20
}

const MAX_LIMIT: i64 = 100;

impl TicketFilter {
    pub fn page_bounds(&self) -> (i64, i64) {
        let limit = self.limit.clamp(1, MAX_LIMIT);
        let page = self.page.max(1);
        (page, limit)
    }

    pub fn offset(&self) -> u64 {
        let (page, limit) = self.page_bounds();
        ((page - 1) * limit) as u64
    }
}

impl SupportTicket {
    /// Open a new ticket for the vendor
    pub fn new(vendor_id: Uuid, input: CreateTicket) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            vendor_id,
            subject: input.subject,
            category: input.category,
            message: input.message,
            status: TicketStatus::Open,
            response: None,
            created_at: now,
            updated_at: now,
        }
    }
}
