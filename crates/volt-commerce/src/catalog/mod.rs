//! Product catalog types.

mod inventory;
mod product;

pub use inventory::InventoryItem;
pub use product::{Product, ProductPatch};
