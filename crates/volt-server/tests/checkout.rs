//! End-to-end checkout behavior over the HTTP surface.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use volt_auth::Role;

use common::*;

#[tokio::test]
async fn checkout_decrements_stock_and_reports_remaining() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [{ "productId": keyboard.as_str(), "quantity": 2 }] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["message"],
        "Checkout successful. Inventory updated."
    );
    assert_eq!(response["updated"], json!([{ "name": "Keyboard", "remaining": 3 }]));
    assert_eq!(stock_of(&state, &keyboard).await, 3);
}

#[tokio::test]
async fn checkout_rejects_oversized_quantity_and_keeps_stock() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [{ "productId": keyboard.as_str(), "quantity": 10 }] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Not enough stock for Keyboard");
    assert_eq!(stock_of(&state, &keyboard).await, 5);
}

#[tokio::test]
async fn empty_cart_is_rejected() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Cart is empty or invalid.");
    assert_eq!(stock_of(&state, &keyboard).await, 5);
}

#[tokio::test]
async fn missing_or_non_array_cart_is_rejected() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    seed_product(&state, "Keyboard", 5).await;

    for body in [json!({}), json!({ "cart": "two keyboards please" })] {
        let (status, response) = send(
            app(&state),
            json_request("POST", "/api/orders/checkout", Some(&token), &body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], "Cart is empty or invalid.");
    }
}

#[tokio::test]
async fn malformed_cart_line_is_rejected_without_mutation() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [{ "productId": 42 }] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Cart is empty or invalid.");
    assert_eq!(stock_of(&state, &keyboard).await, 5);
}

#[tokio::test]
async fn unknown_product_fails_but_earlier_lines_stay_committed() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [
        { "productId": keyboard.as_str(), "quantity": 2 },
        { "productId": "does-not-exist", "quantity": 1 },
    ] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Product not found: does-not-exist");
    // First-come-first-served: the first line's decrement is already durable.
    assert_eq!(stock_of(&state, &keyboard).await, 3);
}

#[tokio::test]
async fn insufficient_stock_mid_cart_keeps_earlier_lines() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    let mouse = seed_product(&state, "Mouse", 30).await;
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [
        { "productId": mouse.as_str(), "quantity": 4 },
        { "productId": keyboard.as_str(), "quantity": 10 },
    ] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Not enough stock for Keyboard");
    assert_eq!(stock_of(&state, &mouse).await, 26);
    assert_eq!(stock_of(&state, &keyboard).await, 5);
}

#[tokio::test]
async fn response_order_matches_cart_order() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    let mouse = seed_product(&state, "Mouse", 30).await;
    let monitor = seed_product(&state, "Monitor", 12).await;

    let body = json!({ "cart": [
        { "productId": monitor.as_str(), "quantity": 1 },
        { "productId": mouse.as_str(), "quantity": 3 },
    ] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["updated"],
        json!([
            { "name": "Monitor", "remaining": 11 },
            { "name": "Mouse", "remaining": 27 },
        ])
    );
}

#[tokio::test]
async fn replaying_a_checkout_is_not_idempotent() {
    let state = test_state();
    let (_, token) = seed_user(&state, "shopper@example.com", Role::Customer).await;
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [{ "productId": keyboard.as_str(), "quantity": 3 }] });

    let (status, _) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Not enough stock for Keyboard");
    assert_eq!(stock_of(&state, &keyboard).await, 2);
}

#[tokio::test]
async fn missing_authorization_header_is_rejected_before_the_engine() {
    let state = test_state();
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [{ "productId": keyboard.as_str(), "quantity": 2 }] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", None, &body),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["message"], "Not authorized");
    assert_eq!(stock_of(&state, &keyboard).await, 5);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let state = test_state();
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [{ "productId": keyboard.as_str(), "quantity": 2 }] });
    let (status, response) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some("not.a.token"), &body),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["message"], "Invalid token");
    assert_eq!(stock_of(&state, &keyboard).await, 5);
}

#[tokio::test]
async fn admins_may_checkout_too() {
    let state = test_state();
    let (_, token) = seed_user(&state, "admin@store.com", Role::Admin).await;
    let keyboard = seed_product(&state, "Keyboard", 5).await;

    let body = json!({ "cart": [{ "productId": keyboard.as_str(), "quantity": 1 }] });
    let (status, _) = send(
        app(&state),
        json_request("POST", "/api/orders/checkout", Some(&token), &body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stock_of(&state, &keyboard).await, 4);
}
