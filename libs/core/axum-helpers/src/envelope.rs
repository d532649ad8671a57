//! The response envelope shared by every endpoint.
//!
//! Success bodies are `{"success": true, "data"?: {...}, "message"?: "..."}`.
//! Error bodies are produced by [`crate::errors::AppError`].

use serde::Serialize;

/// Success envelope wrapping a handler's payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying a data payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Successful response carrying a data payload and a message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Bare `{"success": true}` acknowledgement.
    pub fn success() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    /// Message-only success response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct Pagination {
    pub total: u64,
    pub page: i64,
    pub limit: i64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(total: u64, page: i64, limit: i64) -> Self {
        Self {
            total,
            page,
            limit,
            pages: total.div_ceil(limit.max(1) as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::data(json!({"id": 1}))).unwrap();
        assert_eq!(body, json!({"success": true, "data": {"id": 1}}));
    }

    #[test]
    fn test_message_only_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::ok("tamam")).unwrap();
        assert_eq!(body, json!({"success": true, "message": "tamam"}));
    }

    #[test]
    fn test_bare_success() {
        let body = serde_json::to_value(ApiResponse::success()).unwrap();
        assert_eq!(body, json!({"success": true}));
    }

    #[test]
    fn test_pagination_rounds_pages_up() {
        let pagination = Pagination::new(101, 1, 50);
        assert_eq!(pagination.pages, 3);
        let pagination = Pagination::new(0, 1, 50);
        assert_eq!(pagination.pages, 0);
    }
}
