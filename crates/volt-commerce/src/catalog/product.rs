//! Product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use volt_store::Document;

/// A product in the catalog.
///
/// Serialized camelCase to match the wire format the storefront and admin
/// pages already speak.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Price in the store currency. Never negative.
    pub price: f64,
    /// Units available. Never negative; decremented only at checkout,
    /// set directly only by admin edits.
    pub stock: i64,
    /// Category used for storefront filtering.
    pub category: String,
    /// Manufacturer brand.
    #[serde(default)]
    pub brand: String,
    /// URL of the product image.
    #[serde(default)]
    pub image_url: String,
    /// Average review rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub num_reviews: i64,
    /// Unix timestamp of creation.
    #[serde(default = "current_timestamp")]
    pub created_at: i64,
}

impl Document for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Product {
    /// Create a new product with the required fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
            category: category.into(),
            brand: String::new(),
            image_url: String::new(),
            rating: 0.0,
            num_reviews: 0,
            created_at: current_timestamp(),
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Check whether the requested quantity can be taken from stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }
}

/// Partial update for a product.
///
/// A present field replaces the stored value; an absent field keeps it,
/// matching the admin edit form which submits only what changed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    /// Apply this patch to a product.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(brand) = &self.brand {
            product.brand = brand.clone();
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
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
