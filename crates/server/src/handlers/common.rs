//! Shared handler helpers.

use crate::error::{ApiError, ApiResult};
use axum::body::Body;
use axum::http::header::IF_MATCH;
use axum::http::{HeaderMap, HeaderValue, header};
use serde::de::DeserializeOwned;
use stockpile_core::{IfMatch, etag, product_location};
use stockpile_store::ProductRow;

/// Parse a product id path segment.
pub fn parse_product_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|e| ApiError::BadRequest(format!("invalid product ID {raw:?}: {e}")))
}

/// Read and decode a JSON request body, capped at `limit` bytes.
pub async fn read_json<T: DeserializeOwned>(body: Body, limit: usize) -> ApiResult<T> {
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to read body: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest(format!("invalid JSON: {e}")))
}

/// The `If-Match` precondition, if the request carries one.
pub fn if_match(headers: &HeaderMap) -> ApiResult<Option<IfMatch>> {
    let Some(value) = headers.get(IF_MATCH) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| ApiError::BadRequest("If-Match header is not valid ASCII".to_string()))?;
    Ok(Some(IfMatch::parse(value)?))
}

/// The `If-Match` precondition of a request that must carry one.
pub fn require_if_match(headers: &HeaderMap) -> ApiResult<IfMatch> {
    if_match(headers)?
        .ok_or_else(|| ApiError::BadRequest("missing If-Match header".to_string()))
}

/// `ETag` and `Location` headers describing a product's current state.
pub fn resource_headers(product: &ProductRow) -> ApiResult<HeaderMap> {
    let location = product_location(product.id)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ETAG,
        HeaderValue::from_str(&etag(product.version))
            .map_err(|e| ApiError::Internal(format!("failed to build ETag header: {e}")))?,
    );
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&location)
            .map_err(|e| ApiError::Internal(format!("failed to build Location header: {e}")))?,
    );
    Ok(headers)
}
