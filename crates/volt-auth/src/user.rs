//! User types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use volt_commerce::ids::UserId;
use volt_store::Document;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    /// Check if this role has at least the given permission level.
    pub fn allows(&self, required: Role) -> bool {
        self.level() >= required.level()
    }

    /// Get permission level (higher = more permissions).
    fn level(&self) -> u8 {
        match self {
            Role::Customer => 0,
            Role::Admin => 1,
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (unique across the users collection).
    pub email: String,
    /// Argon2 password hash. Never leaves the backend; API responses use
    /// [`UserView`].
    pub password_hash: String,
    /// Authorization role.
    #[serde(default)]
    pub role: Role,
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl User {
    /// Create a new customer account.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: Role::Customer,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Check if the user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.allows(Role::Admin)
    }
}

/// Public projection of a user, as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserView {
    /// Display name.
    pub name: String,
    /// Authorization role.
    pub role: Role,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        assert!(Role::Admin.allows(Role::Customer));
        assert!(Role::Admin.allows(Role::Admin));
        assert!(!Role::Customer.allows(Role::Admin));
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"customer\"").unwrap(),
            Role::Customer
        );
    }

    #[test]
    fn test_user_defaults_to_customer() {
        let user = User::new("Test", "test@example.com", "hash");
        assert_eq!(user.role, Role::Customer);
        assert!(!user.is_admin());

        let admin = User::new("Admin", "admin@store.com", "hash").with_role(Role::Admin);
        assert!(admin.is_admin());
    }

    #[test]
    fn test_view_hides_password_hash() {
        let user = User::new("Test", "test@example.com", "secret-hash");
        let view = UserView::from(&user);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["name"], "Test");
    }
}
