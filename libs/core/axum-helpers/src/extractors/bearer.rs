//! Bearer token extractor.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use crate::errors::{messages, AppError};

/// Extracts the raw token from an `Authorization: Bearer <token>` header.
///
/// A missing or malformed header rejects with 401 before any handler
/// logic runs. The token is NOT verified here; handlers pass it through
/// the vendor gate explicitly.
///
/// # Example
/// ```ignore
/// async fn me(State(state): State<...>, Bearer(token): Bearer) -> ... {
///     let vendor = state.gate.authenticate(&token).await?;
///     ...
/// }
/// ```
pub struct Bearer(pub String);

impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|auth| auth.strip_prefix("Bearer "))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match token {
            Some(token) => Ok(Bearer(token)),
            None => {
                tracing::debug!("No bearer token in Authorization header");
                Err(AppError::Unauthorized(messages::TOKEN_MISSING.to_string()))
            }
        }
    }
}
