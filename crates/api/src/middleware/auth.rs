//! # Client Identity Module
//!
//! Authentication is owned by the surrounding platform, not by this API.
//! A gateway in front of the service verifies credentials and forwards the
//! caller's id in the `X-Client-Id` header; this module consumes that narrow
//! interface and nothing more.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::middleware::error_handling::AppError;
use slotbook_core::errors::BookingError;

/// Header carrying the authenticated caller's id.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// The authenticated caller of a request.
///
/// Extracting this from a request without a parseable `X-Client-Id` header
/// rejects the request with an authentication error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedClient(pub Uuid);

/// Parses a raw header value into a caller id.
pub fn parse_client_id(value: &str) -> Result<Uuid, BookingError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| BookingError::Authentication("malformed client identity".to_string()))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedClient
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(CLIENT_ID_HEADER).ok_or_else(|| {
            AppError(BookingError::Authentication(
                "missing client identity".to_string(),
            ))
        })?;

        let value = header.to_str().map_err(|_| {
            AppError(BookingError::Authentication(
                "malformed client identity".to_string(),
            ))
        })?;

        Ok(AuthenticatedClient(parse_client_id(value)?))
    }
}
