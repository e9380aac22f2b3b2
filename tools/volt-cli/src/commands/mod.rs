//! CLI command implementations.

pub mod create_admin;
pub mod seed;

pub use create_admin::CreateAdminArgs;
pub use seed::SeedArgs;
