//! Product endpoints.
//!
//! Writes to an existing product are optimistic: the client echoes the
//! version it last saw (the ETag) in `If-Match`, the handler compares it with
//! the freshly read row, and only then writes. The store's own existence
//! check catches a delete that lands between the read and the write.

use crate::error::{ApiError, ApiResult};
use crate::handlers::common::{
    if_match, parse_product_id, read_json, require_if_match, resource_headers,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};
use stockpile_core::{next_version, validate_name, validate_quantity};
use stockpile_store::{NewProductRow, ProductRow};

/// Product representation on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub version: i32,
}

impl From<ProductRow> for ProductResponse {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            version: row.version,
        }
    }
}

/// Request body for POST /product and PUT /product/{id}.
///
/// `id` is accepted so clients can send back a product they read, but the
/// path (or the store, on create) always decides the id.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub quantity: i32,
    #[serde(default)]
    pub version: Option<i32>,
}

impl ProductRequest {
    fn validate(&self) -> ApiResult<()> {
        validate_name(&self.name)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

/// GET /product/{id} - Get a product with its ETag and Location.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(HeaderMap, Json<ProductResponse>)> {
    let id = parse_product_id(&id)?;

    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;

    let headers = resource_headers(&product)?;
    Ok((headers, Json(product.into())))
}

/// GET /products - List all products.
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state.products.find_all().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// POST /product - Create a product.
///
/// Every product starts at [`stockpile_core::INITIAL_VERSION`]; an id or
/// version in the body is ignored.
pub async fn create_product(
    State(state): State<AppState>,
    req: Request,
) -> ApiResult<(StatusCode, HeaderMap, Json<ProductResponse>)> {
    let body: ProductRequest =
        read_json(req.into_body(), state.config.server.max_body_bytes).await?;
    body.validate()?;

    if body.id.is_some() || body.version.is_some() {
        tracing::debug!(
            id = ?body.id,
            version = ?body.version,
            "Ignoring client-supplied id/version on create"
        );
    }

    let candidate = NewProductRow::new(body.name, body.quantity);
    let product = state.products.save(&candidate).await?;

    tracing::info!(
        product_id = product.id,
        version = product.version,
        "Product created"
    );

    let headers = resource_headers(&product)?;
    Ok((StatusCode::CREATED, headers, Json(product.into())))
}

/// PUT /product/{id} - Replace a product if `If-Match` names its current version.
///
/// - 404 if the product does not exist
/// - 409 if `If-Match` does not match the stored version (nothing is written)
/// - 404 if the product disappears between the check and the write
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    req: Request,
) -> ApiResult<(HeaderMap, Json<ProductResponse>)> {
    let id = parse_product_id(&id)?;
    let expected = require_if_match(req.headers())?;
    let body: ProductRequest =
        read_json(req.into_body(), state.config.server.max_body_bytes).await?;
    body.validate()?;

    let mut product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;

    if !expected.matches(product.version) {
        return Err(ApiError::VersionConflict {
            expected,
            current: product.version,
        });
    }

    let previous_version = product.version;
    product.version = next_version(
        state.config.products.version_policy,
        product.version,
        body.version,
    )?;
    product.name = body.name;
    product.quantity = body.quantity;

    if !state.products.update(&product).await? {
        tracing::warn!(product_id = id, "Product vanished before update was written");
        return Err(ApiError::NotFound(format!(
            "product {id} was deleted during update"
        )));
    }

    tracing::info!(
        product_id = id,
        from_version = previous_version,
        to_version = product.version,
        "Product updated"
    );

    let headers = resource_headers(&product)?;
    Ok((headers, Json(product.into())))
}

/// DELETE /product/{id} - Delete a product.
///
/// Unconditional unless the request carries `If-Match`, in which case it must
/// name the current version. With `products.require_if_match_on_delete` set,
/// a delete without `If-Match` is refused with 428.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    let id = parse_product_id(&id)?;
    let precondition = if_match(&headers)?;

    if precondition.is_none() && state.config.products.require_if_match_on_delete {
        return Err(ApiError::PreconditionRequired(
            "deleting a product requires If-Match".to_string(),
        ));
    }

    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;

    if let Some(expected) = precondition
        && !expected.matches(product.version)
    {
        return Err(ApiError::VersionConflict {
            expected,
            current: product.version,
        });
    }

    if !state.products.delete(product.id).await? {
        return Err(ApiError::Internal(format!(
            "product {id} existed but could not be deleted"
        )));
    }

    tracing::info!(product_id = id, version = product.version, "Product deleted");

    Ok(StatusCode::OK)
}
