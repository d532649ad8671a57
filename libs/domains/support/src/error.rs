use axum::response::{IntoResponse, Response};
use axum_helpers::{messages, AppError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupportError {
    /// Also returned when the ticket belongs to another vendor
    #[error("ticket not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}

pub type SupportResult<T> = Result<T, SupportError>;

impl From<SupportError> for AppError {
    fn from(err: SupportError) -> Self {
        match err {
            SupportError::NotFound => AppError::NotFound(messages::TICKET_NOT_FOUND.to_string()),
            SupportError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for SupportError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for SupportError {
    fn from(err: mongodb::error::Error) -> Self {
        SupportError::Database(err.to_string())
    }
}
