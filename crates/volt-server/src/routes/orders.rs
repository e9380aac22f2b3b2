//! Checkout endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use volt_commerce::cart::CartLine;
use volt_commerce::CommerceError;

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/checkout", post(checkout))
}

#[derive(Debug, Deserialize)]
struct CheckoutBody {
    #[serde(default)]
    cart: Option<serde_json::Value>,
}

/// POST /api/orders/checkout
///
/// Any authenticated user may check out; the identity is resolved by the
/// extractor before this body runs and passed to the engine explicitly.
async fn checkout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<CheckoutBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // A missing, non-array, or malformed cart is one and the same failure
    // to the caller.
    let lines = body
        .ok()
        .and_then(|Json(body)| body.cart)
        .filter(|cart| cart.is_array())
        .and_then(|cart| serde_json::from_value::<Vec<CartLine>>(cart).ok())
        .ok_or(CommerceError::InvalidCart)?;

    let receipt = state.engine.checkout(&user.id, &lines).await?;

    Ok(Json(json!({
        "message": "Checkout successful. Inventory updated.",
        "updated": receipt.updated,
    })))
}
