//! Checkout engine.
//!
//! Takes an authenticated shopper and a list of cart lines, and commits
//! stock decrements line by line. Each decrement is a single conditional
//! update under the store lock, so two concurrent checkouts of the same
//! product serialize and stock can never go negative.
//!
//! Failure mid-cart stops processing immediately and leaves earlier lines
//! committed. Checkout is first-come-first-served, not all-or-nothing.

use serde::Serialize;
use tracing::{info, warn};
use volt_store::{Collection, Store, Updated};

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::UserId;

/// One line of a successful checkout response, in cart order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdatedLine {
    /// Product name.
    pub name: String,
    /// Stock remaining after the decrement.
    pub remaining: i64,
}

/// Result of a fully successful checkout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Receipt {
    /// One entry per cart line, in the order submitted.
    pub updated: Vec<UpdatedLine>,
}

/// The checkout engine.
///
/// Holds the product collection accessor; construct one from the injected
/// [`Store`] at startup and share it.
#[derive(Clone)]
pub struct CheckoutEngine {
    products: Collection<Product>,
}

impl CheckoutEngine {
    /// Create an engine backed by the given store.
    pub fn new(store: &Store) -> Self {
        Self {
            products: store.collection(),
        }
    }

    /// Validate and commit a cart for the given shopper.
    ///
    /// Lines are processed strictly in submitted order. Per line:
    /// decrement the product's stock by the requested quantity only if the
    /// quantity does not exceed the current stock; otherwise fail. A missing
    /// product or an oversized quantity stops processing at that line, with
    /// every earlier line already persisted.
    pub async fn checkout(
        &self,
        shopper: &UserId,
        lines: &[CartLine],
    ) -> Result<Receipt, CommerceError> {
        if lines.is_empty() {
            return Err(CommerceError::InvalidCart);
        }

        info!(shopper = %shopper, lines = lines.len(), "processing checkout");

        let mut updated = Vec::with_capacity(lines.len());

        for line in lines {
            let outcome = self
                .products
                .update(line.product_id.as_str(), |product| {
                    if line.quantity > product.stock {
                        return false;
                    }
                    product.stock -= line.quantity;
                    true
                })
                .await?;

            match outcome {
                Updated::Missing => {
                    warn!(product = %line.product_id, "checkout referenced unknown product");
                    return Err(CommerceError::ProductNotFound(line.product_id.to_string()));
                }
                Updated::Rejected(product) => {
                    warn!(
                        product = %line.product_id,
                        requested = line.quantity,
                        available = product.stock,
                        "checkout rejected for insufficient stock"
                    );
                    return Err(CommerceError::InsufficientStock {
                        name: product.name,
                        requested: line.quantity,
                        available: product.stock,
                    });
                }
                Updated::Applied(product) => {
                    updated.push(UpdatedLine {
                        name: product.name,
                        remaining: product.stock,
                    });
                }
            }
        }

        info!(shopper = %shopper, lines = updated.len(), "checkout committed");

        Ok(Receipt { updated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    async fn seed_product(store: &Store, name: &str, stock: i64) -> ProductId {
        let product = Product::new(name, "test product", 10.0, stock, "Test");
        let id = product.id.clone();
        store.collection::<Product>().save(&product).await.unwrap();
        id
    }

    async fn stock_of(store: &Store, id: &ProductId) -> i64 {
        store
            .collection::<Product>()
            .find_by_id(id.as_str())
            .await
            .unwrap()
            .unwrap()
            .stock
    }

    fn shopper() -> UserId {
        UserId::new("user_test")
    }

    #[tokio::test]
    async fn test_checkout_decrements_and_reports() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 5).await;
        let engine = CheckoutEngine::new(&store);

        let receipt = engine
            .checkout(&shopper(), &[CartLine::new(keyboard.clone(), 2)])
            .await
            .unwrap();

        assert_eq!(
            receipt.updated,
            vec![UpdatedLine {
                name: "Keyboard".to_string(),
                remaining: 3,
            }]
        );
        assert_eq!(stock_of(&store, &keyboard).await, 3);
    }

    #[tokio::test]
    async fn test_checkout_preserves_cart_order() {
        let store = Store::in_memory();
        let mouse = seed_product(&store, "Mouse", 30).await;
        let monitor = seed_product(&store, "Monitor", 12).await;
        let engine = CheckoutEngine::new(&store);

        let receipt = engine
            .checkout(
                &shopper(),
                &[
                    CartLine::new(monitor.clone(), 1),
                    CartLine::new(mouse.clone(), 3),
                ],
            )
            .await
            .unwrap();

        let names: Vec<&str> = receipt.updated.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Monitor", "Mouse"]);
        assert_eq!(receipt.updated[0].remaining, 11);
        assert_eq!(receipt.updated[1].remaining, 27);
    }

    #[tokio::test]
    async fn test_empty_cart_rejected_without_mutation() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 5).await;
        let engine = CheckoutEngine::new(&store);

        let err = engine.checkout(&shopper(), &[]).await.unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCart));
        assert_eq!(err.to_string(), "Cart is empty or invalid.");
        assert_eq!(stock_of(&store, &keyboard).await, 5);
    }

    #[tokio::test]
    async fn test_unknown_product_stops_and_keeps_earlier_lines() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 5).await;
        let engine = CheckoutEngine::new(&store);

        let err = engine
            .checkout(
                &shopper(),
                &[
                    CartLine::new(keyboard.clone(), 2),
                    CartLine::new("missing-id", 1),
                ],
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Product not found: missing-id");
        // The first line committed before the failure.
        assert_eq!(stock_of(&store, &keyboard).await, 3);
    }

    #[tokio::test]
    async fn test_insufficient_stock_leaves_offender_unchanged() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 5).await;
        let mouse = seed_product(&store, "Mouse", 30).await;
        let engine = CheckoutEngine::new(&store);

        let err = engine
            .checkout(
                &shopper(),
                &[
                    CartLine::new(mouse.clone(), 4),
                    CartLine::new(keyboard.clone(), 10),
                ],
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not enough stock for Keyboard");
        match err {
            CommerceError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 10);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Earlier line committed, offending product untouched.
        assert_eq!(stock_of(&store, &mouse).await, 26);
        assert_eq!(stock_of(&store, &keyboard).await, 5);
    }

    #[tokio::test]
    async fn test_checkout_is_not_idempotent() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 5).await;
        let engine = CheckoutEngine::new(&store);
        let cart = [CartLine::new(keyboard.clone(), 3)];

        let first = engine.checkout(&shopper(), &cart).await.unwrap();
        assert_eq!(first.updated[0].remaining, 2);

        // Replaying the identical request runs against the new stock.
        let err = engine.checkout(&shopper(), &cart).await.unwrap_err();
        assert_eq!(err.to_string(), "Not enough stock for Keyboard");
        assert_eq!(stock_of(&store, &keyboard).await, 2);
    }

    #[tokio::test]
    async fn test_zero_quantity_line_is_a_no_op_success() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 5).await;
        let engine = CheckoutEngine::new(&store);

        let receipt = engine
            .checkout(&shopper(), &[CartLine::new(keyboard.clone(), 0)])
            .await
            .unwrap();

        assert_eq!(receipt.updated[0].remaining, 5);
        assert_eq!(stock_of(&store, &keyboard).await, 5);
    }

    #[tokio::test]
    async fn test_exact_stock_drains_to_zero() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 5).await;
        let engine = CheckoutEngine::new(&store);

        let receipt = engine
            .checkout(&shopper(), &[CartLine::new(keyboard.clone(), 5)])
            .await
            .unwrap();

        assert_eq!(receipt.updated[0].remaining, 0);
        assert_eq!(stock_of(&store, &keyboard).await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_checkouts_never_oversell() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 10).await;
        let engine = CheckoutEngine::new(&store);

        let mut handles = Vec::new();
        for i in 0..20 {
            let engine = engine.clone();
            let keyboard = keyboard.clone();
            handles.push(tokio::spawn(async move {
                let shopper = UserId::new(format!("user_{i}"));
                engine
                    .checkout(&shopper, &[CartLine::new(keyboard, 1)])
                    .await
                    .is_ok()
            }));
        }

        let mut succeeded = 0;
        for handle in handles {
            if handle.await.unwrap() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 10);
        assert_eq!(stock_of(&store, &keyboard).await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_lines_read_fresh_stock() {
        let store = Store::in_memory();
        let keyboard = seed_product(&store, "Keyboard", 5).await;
        let engine = CheckoutEngine::new(&store);

        // 3 + 3 exceeds stock even though each line alone fits.
        let err = engine
            .checkout(
                &shopper(),
                &[
                    CartLine::new(keyboard.clone(), 3),
                    CartLine::new(keyboard.clone(), 3),
                ],
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not enough stock for Keyboard");
        // First line committed; second saw the decremented value.
        assert_eq!(stock_of(&store, &keyboard).await, 2);
    }
}
