//! # Product Routes
//!
//! HTTP handlers for the product CRUD surface.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base path /api, trailing-slash routes                                  │
//! │                                                                         │
//! │  GET    /api/products/        → 200 [Product, ...]                     │
//! │  POST   /api/products/        → 201 Product | 400 | 409                │
//! │  GET    /api/products/{id}/   → 200 Product | 404                      │
//! │  PUT    /api/products/{id}/   → 200 Product | 400 | 404 | 409          │
//! │  PATCH  /api/products/{id}/   → 200 Product | 400 | 404 | 409          │
//! │  DELETE /api/products/{id}/   → 204         | 404                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers hold no state and apply no business logic of their own: they
//! deserialize, validate through stockroom-core, delegate to the repository,
//! and serialize the result or the error.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;
use uuid::Uuid;

use stockroom_core::{ProductDto, ProductPatchRequest, ProductRequest};
use stockroom_db::Database;

use crate::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/api/products/", get(list_products).post(create_product))
        .route(
            "/api/products/:id/",
            get(get_product)
                .put(replace_product)
                .patch(patch_product)
                .delete(delete_product),
        )
}

/// Validates a path id.
///
/// A malformed id behaves like an unknown one (404): the id space is
/// UUIDs, so anything else simply isn't an addressable resource.
fn parse_id(id: &str) -> Result<&str, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound)?;
    Ok(id)
}

pub async fn list_products(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = db.products().list().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

pub async fn create_product(
    Extension(db): Extension<Database>,
    Json(body): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let new = body.validate()?;
    debug!(sku = %new.sku, "create_product");

    let created = db.products().insert(&new).await?;
    Ok((StatusCode::CREATED, Json(ProductDto::from(created))))
}

pub async fn get_product(
    Extension(db): Extension<Database>,
    Path(id): Path<String>,
) -> Result<Json<ProductDto>, ApiError> {
    let id = parse_id(&id)?;
    let product = db.products().get_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(ProductDto::from(product)))
}

pub async fn replace_product(
    Extension(db): Extension<Database>,
    Path(id): Path<String>,
    Json(body): Json<ProductRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    let id = parse_id(&id)?;
    let fields = body.validate()?;
    debug!(id = %id, "replace_product");

    let updated = db.products().replace(id, &fields).await?;
    Ok(Json(ProductDto::from(updated)))
}

pub async fn patch_product(
    Extension(db): Extension<Database>,
    Path(id): Path<String>,
    Json(body): Json<ProductPatchRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    let id = parse_id(&id)?;
    let patch = body.validate()?;
    debug!(id = %id, "patch_product");

    let updated = db.products().patch(id, &patch).await?;
    Ok(Json(ProductDto::from(updated)))
}

pub async fn delete_product(
    Extension(db): Extension<Database>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    debug!(id = %id, "delete_product");

    db.products().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
