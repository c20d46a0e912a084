//! Integration tests for export authentication
//!
//! Tests: token sources (header, query, cookie), missing and invalid tokens

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use tally_api::{AppState, build_router};
use tally_auth::{LocalJwtProvider, Role, test_utils};
use tally_catalog::{Item, MemoryCatalog};

const EXPORT_URI: &str = "/api/v1/export/products";

fn test_app() -> Router {
    let catalog: MemoryCatalog = [Item::new(1, "Widget")].into_iter().collect();
    let state = AppState::new(
        Arc::new(LocalJwtProvider::new(test_utils::TEST_SECRET)),
        Arc::new(catalog),
    );
    build_router(state)
}

fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method(Method::GET).uri(uri)
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_export_requires_auth() {
    let response = test_app()
        .oneshot(get(EXPORT_URI).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = response_json(response).await;
    assert_eq!(json["error"], "AUTH_REQUIRED");
    assert_eq!(json["status"], 401);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let request = get(EXPORT_URI)
        .header(header::AUTHORIZATION, "Bearer not-a-token")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response_json(response).await["error"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_wrong_secret_rejected() {
    let token = test_utils::create_token(test_utils::TokenOptions {
        secret: b"another-secret-key-32-bytes-long",
        ..test_utils::TokenOptions::new("user-1", "m@shop.test", Role::Manager)
    });
    let request = get(EXPORT_URI)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response_json(response).await["error"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let token = test_utils::create_token(test_utils::TokenOptions {
        expires_in: chrono::Duration::hours(-1),
        ..test_utils::TokenOptions::new("user-1", "m@shop.test", Role::Manager)
    });
    let request = get(EXPORT_URI)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response_json(response).await["error"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_token_in_query_param() {
    let token = test_utils::manager_token("user-1", "m@shop.test");
    let request = get(&format!("{}?token={}", EXPORT_URI, token))
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_token_in_cookie() {
    let token = test_utils::manager_token("user-1", "m@shop.test");
    let request = get(EXPORT_URI)
        .header(header::COOKIE, format!("theme=dark; tally_token={}", token))
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let response = test_app()
        .oneshot(get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let token = test_utils::manager_token("user-1", "m@shop.test");
    let request = get("/api/v1/export/orders")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
