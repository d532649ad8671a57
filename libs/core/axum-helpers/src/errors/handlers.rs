use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{messages, ErrorBody};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(messages::ROUTE_NOT_FOUND)),
    )
        .into_response()
}
