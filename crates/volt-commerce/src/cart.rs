//! Transient cart lines submitted at checkout.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product/quantity pair from a submitted cart.
///
/// Never persisted; lives only for the duration of a checkout call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Requested quantity.
    pub quantity: i64,
}

impl CartLine {
    /// Create a cart line.
    pub fn new(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}
