//! JSON document store for the VoltMart backend.
//!
//! Provides a small Mongo-flavored persistence layer: named collections of
//! JSON documents keyed by string id, with typed accessors and an atomic
//! conditional-update primitive.
//!
//! The [`Store`] handle is opened once at startup and passed by injection to
//! whatever needs it; it is cheap to clone.
//!
//! # Example
//!
//! ```rust,ignore
//! use volt_store::{Document, Store};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Product {
//!     id: String,
//!     name: String,
//!     stock: i64,
//! }
//!
//! impl Document for Product {
//!     const COLLECTION: &'static str = "products";
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! let store = Store::open("volt.db.json").await?;
//! let products = store.collection::<Product>();
//!
//! products.save(&product).await?;
//! let found = products.find_by_id("prod_1").await?;
//! ```

mod document;
mod error;
mod store;

pub use document::Document;
pub use error::StoreError;
pub use store::{Collection, Store, Updated};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Collection, Document, Store, StoreError, Updated};
}
