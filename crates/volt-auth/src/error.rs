//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email already registered.
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// No usable bearer credential on the request.
    #[error("not authorized")]
    NotAuthorized,

    /// Token invalid.
    #[error("token invalid")]
    InvalidToken,

    /// Token expired.
    #[error("token expired")]
    TokenExpired,

    /// Caller lacks the required role.
    #[error("insufficient permissions")]
    Forbidden,

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] volt_store::StoreError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Check if this is an authentication failure (as opposed to a
    /// permission or infrastructure problem).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials
                | AuthError::NotAuthorized
                | AuthError::InvalidToken
                | AuthError::TokenExpired
        )
    }
}
