//! Standalone inventory listing.
//!
//! Separate from the product catalog: these are back-room items surfaced on
//! the inventory page, written by the seeder and read over HTTP.

use crate::ids::InventoryItemId;
use serde::{Deserialize, Serialize};
use volt_store::Document;

/// An inventory listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Unique item identifier.
    pub id: InventoryItemId,
    /// Item name.
    pub name: String,
    /// Manufacturer brand.
    #[serde(default)]
    pub brand: String,
    /// Item description.
    #[serde(default)]
    pub description: String,
    /// Price in the store currency.
    pub price: f64,
    /// Units on hand.
    pub stock: i64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Document for InventoryItem {
    const COLLECTION: &'static str = "inventory";

    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl InventoryItem {
    /// Create a new inventory item.
    pub fn new(name: impl Into<String>, price: f64, stock: i64) -> Self {
        let now = current_timestamp();
        Self {
            id: InventoryItemId::generate(),
            name: name.into(),
            brand: String::new(),
            description: String::new(),
            price,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
