//! Server configuration from the environment.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{info, warn};

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP listener binds.
    pub port: u16,
    /// Path of the store snapshot file.
    pub store_path: PathBuf,
    /// Secret used to sign bearer tokens.
    pub jwt_secret: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn load() -> Self {
        let jwt_secret = try_load::<String>("JWT_SECRET", "secretkey");
        if jwt_secret == "secretkey" {
            warn!("JWT_SECRET is the development default; set it in production");
        }

        Self {
            port: try_load("PORT", "5000"),
            store_path: PathBuf::from(try_load::<String>("VOLT_STORE", "volt.db.json")),
            jwt_secret,
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| warn!("Invalid {key} value: {e}"))
        .unwrap_or_else(|_| {
            default
                .parse()
                .unwrap_or_else(|_| unreachable!("default for {key} must parse"))
        })
}
