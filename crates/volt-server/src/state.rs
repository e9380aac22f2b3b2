//! Shared application state.

use std::sync::Arc;

use volt_auth::TokenIssuer;
use volt_commerce::checkout::CheckoutEngine;
use volt_store::Store;

/// State injected into every handler.
///
/// Built once in `main` after the store is opened, then cloned per request;
/// everything inside is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    /// The document store handle.
    pub store: Store,
    /// Bearer-token issuer/verifier.
    pub tokens: Arc<TokenIssuer>,
    /// The checkout engine.
    pub engine: CheckoutEngine,
}

impl AppState {
    /// Assemble state from an opened store and a token issuer.
    pub fn new(store: Store, tokens: TokenIssuer) -> Self {
        let engine = CheckoutEngine::new(&store);
        Self {
            store,
            tokens: Arc::new(tokens),
            engine,
        }
    }
}
