use axum::response::{IntoResponse, Response};
use axum_helpers::{messages, AppError};
use thiserror::Error;

use crate::models::VendorStatus;

#[derive(Debug, Error)]
pub enum VendorError {
    #[error("email already registered")]
    EmailTaken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid or expired token")]
    TokenInvalid,

    #[error("wrong token kind")]
    TokenKindMismatch,

    #[error("vendor not found")]
    UnknownVendor,

    #[error("current password mismatch")]
    WrongCurrentPassword,

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("vendor status '{status}' does not permit this operation")]
    NotApproved {
        status: VendorStatus,
        reason: Option<String>,
    },

    #[error("password hashing error: {0}")]
    PasswordHash(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type VendorResult<T> = Result<T, VendorError>;

/// Human-readable gate message for a non-approved status.
///
/// The rejected message embeds the stored reason, falling back to the
/// catalog's "unspecified" string.
pub fn status_gate_message(status: VendorStatus, reason: Option<&str>) -> String {
    match status {
        VendorStatus::PendingReview => messages::STATUS_PENDING_REVIEW.to_string(),
        VendorStatus::Rejected => format!(
            "{}{}",
            messages::STATUS_REJECTED_PREFIX,
            reason.unwrap_or(messages::STATUS_REJECTION_UNSPECIFIED)
        ),
        VendorStatus::Suspended => messages::STATUS_SUSPENDED.to_string(),
        // Unreachable through the gate; kept total for callers
        VendorStatus::Approved => messages::STATUS_NOT_APPROVED.to_string(),
    }
}

/// Convert VendorError to AppError for standardized error responses
impl From<VendorError> for AppError {
    fn from(err: VendorError) -> Self {
        match err {
            VendorError::EmailTaken => AppError::Conflict(messages::EMAIL_TAKEN.to_string()),
            VendorError::InvalidCredentials => {
                AppError::Unauthorized(messages::INVALID_CREDENTIALS.to_string())
            }
            VendorError::TokenInvalid => {
                AppError::Unauthorized(messages::TOKEN_INVALID.to_string())
            }
            VendorError::TokenKindMismatch => {
                AppError::Unauthorized(messages::TOKEN_WRONG_KIND.to_string())
            }
            VendorError::UnknownVendor => {
                AppError::Unauthorized(messages::VENDOR_NOT_FOUND.to_string())
            }
            VendorError::WrongCurrentPassword => {
                AppError::Unauthorized(messages::CURRENT_PASSWORD_WRONG.to_string())
            }
            VendorError::Validation(msg) => AppError::BadRequest(msg),
            VendorError::NotApproved { status, reason } => {
                AppError::Forbidden(status_gate_message(status, reason.as_deref()))
            }
            VendorError::PasswordHash(msg) => AppError::InternalServerError(msg),
            VendorError::Database(msg) => AppError::InternalServerError(msg),
            VendorError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for VendorError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for VendorError {
    fn from(err: mongodb::error::Error) -> Self {
        VendorError::Database(err.to_string())
    }
}
