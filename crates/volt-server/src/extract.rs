//! Identity extractors.
//!
//! The acting user is resolved here, once, and handed to handlers as an
//! explicit value; nothing downstream reaches back into request state.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;
use volt_auth::{AuthError, User};

use crate::error::ApiError;
use crate::state::AppState;

/// Extract the Bearer token from a request's Authorization header.
fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::NotAuthorized)
}

/// The authenticated caller.
///
/// Rejects with 401 "Not authorized" when no Bearer credential is present,
/// and 401 "Invalid token" when the credential doesn't verify or its user no
/// longer exists.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).map_err(ApiError::Auth)?;

        let claims = state.tokens.verify(token).map_err(ApiError::Auth)?;

        let user = state
            .store
            .collection::<User>()
            .find_by_id(&claims.sub)
            .await
            .map_err(|e| ApiError::Auth(AuthError::Store(e)))?
            .ok_or(ApiError::Auth(AuthError::InvalidToken))?;

        debug!(user = %user.id, role = user.role.as_str(), "request authenticated");

        Ok(CurrentUser(user))
    }
}

/// An authenticated administrator.
///
/// Same as [`CurrentUser`] plus a role check; non-admins get 403
/// "Admin access only".
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(ApiError::Auth(AuthError::Forbidden));
        }

        Ok(AdminUser(user))
    }
}
