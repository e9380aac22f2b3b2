//! API error type and response mapping.
//!
//! Every error leaving a handler becomes a `{ "message": ... }` JSON body
//! with the status code the storefront already expects. The mapping of
//! message strings lives here and nowhere else.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use volt_auth::AuthError;
use volt_commerce::CommerceError;

/// Error returned by API handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Checkout/commerce failure; carries its own caller-facing message.
    #[error("{0}")]
    Commerce(#[from] CommerceError),

    /// Authentication or authorization failure.
    #[error("{0}")]
    Auth(AuthError),

    /// Invalid input with an exact caller-facing message.
    #[error("{0}")]
    BadRequest(String),

    /// Missing resource with an exact caller-facing message.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; the string is the public envelope, the cause has
    /// already been logged.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Log the underlying cause and return a 500 with a public message.
    pub fn internal(public: &str, cause: impl std::fmt::Display) -> Self {
        error!(error = %cause, "{public}");
        ApiError::Internal(public.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Commerce(err) => match &err {
                CommerceError::InvalidCart => (StatusCode::BAD_REQUEST, err.to_string()),
                CommerceError::ProductNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                CommerceError::InsufficientStock { .. } => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                CommerceError::Store(cause) => {
                    error!(error = %cause, "checkout failed in the store layer");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Checkout failed".into())
                }
            },
            ApiError::Auth(err) => match err {
                AuthError::NotAuthorized => (StatusCode::UNAUTHORIZED, "Not authorized".into()),
                AuthError::InvalidToken | AuthError::TokenExpired => {
                    (StatusCode::UNAUTHORIZED, "Invalid token".into())
                }
                AuthError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, "Invalid credentials".into())
                }
                AuthError::EmailTaken(_) => (StatusCode::BAD_REQUEST, "Email already exists".into()),
                AuthError::Forbidden => (StatusCode::FORBIDDEN, "Admin access only".into()),
                AuthError::Store(cause) => {
                    error!(error = %cause, "auth failed in the store layer");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Server error".into())
                }
                AuthError::Internal(cause) => {
                    error!(error = %cause, "internal auth failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Server error".into())
                }
            },
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
