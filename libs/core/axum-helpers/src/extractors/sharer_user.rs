//! Caller identity header extractor.

use crate::errors::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the id of the user performing the request.
pub const SHARER_USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Id of the calling user, read from the `X-Sharer-User-Id` header.
///
/// The value is trusted as-is: it is only compared with stored owner ids and
/// never authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerUserId(pub i64);

impl<S> FromRequestParts<S> for SharerUserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_USER_ID_HEADER)
            .ok_or_else(|| AppError::InvalidHeader(format!("Missing header: {}", SHARER_USER_ID_HEADER)))?;

        value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(SharerUserId)
            .ok_or_else(|| {
                AppError::InvalidHeader(format!(
                    "Header {} must be an integer user id",
                    SHARER_USER_ID_HEADER
                ))
            })
    }
}
