use axum::response::{IntoResponse, Response};
use axum_helpers::{messages, AppError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// Also returned when the product exists but belongs to another
    /// vendor; ownership is never revealed.
    #[error("product not found")]
    NotFound,

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => AppError::NotFound(messages::PRODUCT_NOT_FOUND.to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}
