//! Inventory listing endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use volt_commerce::catalog::InventoryItem;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list))
}

/// GET /api/inventory
async fn list(State(state): State<AppState>) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    let items = state
        .store
        .collection::<InventoryItem>()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Server error", e))?;
    Ok(Json(items))
}
