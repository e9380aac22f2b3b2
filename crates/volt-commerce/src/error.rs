//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// Display strings are the exact messages the HTTP surface returns, so
/// handlers never re-word them.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Cart missing, not a list, or empty.
    #[error("Cart is empty or invalid.")]
    InvalidCart,

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds available stock.
    #[error("Not enough stock for {name}")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: i64,
    },

    /// Underlying store failure.
    #[error("Store error: {0}")]
    Store(#[from] volt_store::StoreError),
}
