//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde_json::Value;

use crate::models::{Schema, ValidationError};
use super::error::ApiError;

/// Extract a record id from the path.
///
/// Only unsigned decimal integers match, the way an `<int:id>` route
/// converter would; anything else is treated as an unknown route. Ids too
/// large for any row still match and simply find nothing.
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteNotFound)?;

        parse_record_id(&raw).map(Self).ok_or(ApiError::RouteNotFound)
    }
}

fn parse_record_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow can fail here; past i64 no row can match either.
    Some(raw.parse().unwrap_or(i64::MAX))
}

/// Extract a JSON body and load it through a [`Schema`].
///
/// Rejects with 415 when the body is not declared as JSON and with 400
/// (field map) when it does not validate.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: Schema + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Err(ApiError::UnsupportedMediaType);
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ValidationError::invalid_json())?;

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|_| ValidationError::invalid_json())?;

        Ok(Self(T::load(&value)?))
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
