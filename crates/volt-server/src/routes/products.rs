//! Product catalog endpoints.
//!
//! Reads are public; mutations require an admin bearer token.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use volt_commerce::catalog::{Product, ProductPatch};
use volt_store::Updated;

use crate::error::ApiError;
use crate::extract::AdminUser;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
}

/// GET /api/products
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .store
        .collection::<Product>()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Server error", e))?;
    Ok(Json(products))
}

/// GET /api/products/{id}
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .store
        .collection::<Product>()
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::internal("Server error", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewProduct {
    name: Option<String>,
    brand: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    stock: Option<i64>,
    category: Option<String>,
    image_url: Option<String>,
}

/// POST /api/products (admin)
async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let (Some(name), Some(description), Some(price), Some(stock), Some(category)) = (
        body.name.filter(|s| !s.is_empty()),
        body.description.filter(|s| !s.is_empty()),
        body.price,
        body.stock,
        body.category.filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    };

    let mut product = Product::new(name, description, price, stock, category);
    if let Some(brand) = body.brand {
        product = product.with_brand(brand);
    }
    if let Some(image_url) = body.image_url {
        product = product.with_image_url(image_url);
    }

    state
        .store
        .collection::<Product>()
        .save(&product)
        .await
        .map_err(|e| ApiError::internal("Server error during product creation", e))?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id} (admin)
async fn update(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let outcome = state
        .store
        .collection::<Product>()
        .update(&id, |product| {
            patch.apply(product);
            true
        })
        .await
        .map_err(|e| ApiError::internal("Server error during update", e))?;

    match outcome {
        Updated::Applied(product) => Ok(Json(product)),
        Updated::Rejected(_) | Updated::Missing => {
            Err(ApiError::NotFound("Product not found".to_string()))
        }
    }
}

/// DELETE /api/products/{id} (admin)
async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = state
        .store
        .collection::<Product>()
        .delete(&id)
        .await
        .map_err(|e| ApiError::internal("Server error during delete", e))?;

    if !removed {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
