//! Commerce domain types and logic for VoltMart.
//!
//! This crate provides the store's domain layer:
//!
//! - **Catalog**: products and the standalone inventory listing
//! - **Services**: service-provider directory entries
//! - **Cart**: the transient cart lines submitted at checkout
//! - **Checkout**: the stock-decrementing checkout engine
//!
//! # Example
//!
//! ```rust,ignore
//! use volt_commerce::prelude::*;
//! use volt_store::Store;
//!
//! let store = Store::in_memory();
//! let engine = CheckoutEngine::new(&store);
//!
//! let receipt = engine
//!     .checkout(&shopper, &[CartLine::new(product_id, 2)])
//!     .await?;
//! println!("{} left", receipt.updated[0].remaining);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod services;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    pub use crate::catalog::{InventoryItem, Product, ProductPatch};
    pub use crate::services::{ServicePatch, ServiceProvider};

    pub use crate::cart::CartLine;
    pub use crate::checkout::{CheckoutEngine, Receipt, UpdatedLine};
}
