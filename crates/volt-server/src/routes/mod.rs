//! Route assembly.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod auth;
mod inventory;
mod orders;
mod products;
mod services;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ping", get(ping))
        .nest("/api/auth", auth::routes())
        .nest("/api/products", products::routes())
        .nest("/api/orders", orders::routes())
        .nest("/api/inventory", inventory::routes())
        .nest("/api/services", services::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe.
async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "message": "pong" }))
}
