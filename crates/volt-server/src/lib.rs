//! REST API server for the VoltMart electronics store.
//!
//! Exposes the catalog, inventory, service directory, account, and checkout
//! endpoints under `/api`. The router is a plain axum [`Router`] built from
//! an injected [`state::AppState`], so tests drive it in-process without
//! binding a socket.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
