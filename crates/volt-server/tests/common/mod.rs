//! Shared helpers for the API integration tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use volt_auth::{hash_password, Role, TokenIssuer, User};
use volt_commerce::catalog::Product;
use volt_commerce::ids::ProductId;
use volt_server::{router, AppState};
use volt_store::Store;

pub const SECRET: &str = "test-secret";

/// Fresh state over an in-memory store.
pub fn test_state() -> AppState {
    AppState::new(Store::in_memory(), TokenIssuer::new(SECRET))
}

/// Build a router over the given state.
pub fn app(state: &AppState) -> Router {
    router(state.clone())
}

/// Insert a user and return it with a valid bearer token.
pub async fn seed_user(state: &AppState, email: &str, role: Role) -> (User, String) {
    let user = User::new("Test User", email, hash_password("password1").unwrap()).with_role(role);
    state.store.collection::<User>().save(&user).await.unwrap();
    let token = state.tokens.issue(&user).unwrap();
    (user, token)
}

/// Insert a product and return its id.
pub async fn seed_product(state: &AppState, name: &str, stock: i64) -> ProductId {
    let product = Product::new(name, "integration test product", 99.0, stock, "Test");
    let id = product.id.clone();
    state
        .store
        .collection::<Product>()
        .save(&product)
        .await
        .unwrap();
    id
}

/// Read a product's current stock straight from the store.
pub async fn stock_of(state: &AppState, id: &ProductId) -> i64 {
    state
        .store
        .collection::<Product>()
        .find_by_id(id.as_str())
        .await
        .unwrap()
        .unwrap()
        .stock
}

/// Drive one request through the router and decode the JSON response.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Build a GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Build a JSON request with an optional bearer token.
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
