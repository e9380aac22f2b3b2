//! Account flows: registration and login.

use serde::Deserialize;
use tracing::info;
use volt_store::Collection;

use crate::password::{hash_password, verify_password};
use crate::token::TokenIssuer;
use crate::user::{Role, User, UserView};
use crate::AuthError;

/// Registration payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Optional role; defaults to customer.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new account and issue its first token.
pub async fn register(
    users: &Collection<User>,
    tokens: &TokenIssuer,
    req: RegisterRequest,
) -> Result<(String, UserView), AuthError> {
    if users.find_one(|u| u.email == req.email).await?.is_some() {
        return Err(AuthError::EmailTaken(req.email));
    }

    let user = User::new(req.name, req.email, hash_password(&req.password)?)
        .with_role(req.role.unwrap_or_default());
    users.save(&user).await?;

    info!(user = %user.id, role = user.role.as_str(), "registered user");

    let token = tokens.issue(&user)?;
    Ok((token, UserView::from(&user)))
}

/// Verify credentials and issue a token.
///
/// An unknown email and a wrong password are indistinguishable to the
/// caller.
pub async fn login(
    users: &Collection<User>,
    tokens: &TokenIssuer,
    req: LoginRequest,
) -> Result<(String, UserView), AuthError> {
    let user = users
        .find_one(|u| u.email == req.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    info!(user = %user.id, "login succeeded");

    let token = tokens.issue(&user)?;
    Ok((token, UserView::from(&user)))
}
