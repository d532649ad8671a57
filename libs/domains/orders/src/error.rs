use axum::response::{IntoResponse, Response};
use axum_helpers::{messages, AppError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    /// Also returned when the order exists but belongs to another vendor
    #[error("order not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound => AppError::NotFound(messages::ORDER_NOT_FOUND.to_string()),
            OrderError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for OrderError {
    fn from(err: mongodb::error::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}
