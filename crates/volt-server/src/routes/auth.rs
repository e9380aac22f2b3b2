//! Account endpoints: register and login.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use volt_auth::{AuthError, LoginRequest, RegisterRequest};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (token, user) = volt_auth::register(&state.store.collection(), &state.tokens, req)
        .await
        .map_err(|e| match e {
            AuthError::EmailTaken(_) => ApiError::Auth(e),
            e => ApiError::internal("Registration failed", e),
        })?;

    Ok(Json(json!({ "token": token, "user": user })))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (token, user) = volt_auth::login(&state.store.collection(), &state.tokens, req)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => ApiError::Auth(e),
            e => ApiError::internal("Login failed", e),
        })?;

    Ok(Json(json!({ "token": token, "user": user })))
}
