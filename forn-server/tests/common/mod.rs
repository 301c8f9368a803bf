#![allow(dead_code)]

//! Test infrastructure for forn-server API tests

use forn_auth::{TokenIssuer, TokenSettings};
use forn_directory::{LockoutPolicy, UserDirectory};
use forn_server::AppState;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use sqlx::SqlitePool;

/// HS256 secret used by every test issuer
pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes";
pub const TEST_ISSUER: &str = "fornecedor-api";
pub const TEST_AUDIENCE: &str = "fornecedor-api";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/forn-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_token_settings() -> TokenSettings {
    TokenSettings {
        secret: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        audience: TEST_AUDIENCE.to_string(),
        lifetime_secs: 3600,
    }
}

/// Create AppState for testing, with auth enabled
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let issuer =
        TokenIssuer::from_settings(&test_token_settings()).expect("Failed to create token issuer");

    AppState {
        pool: pool.clone(),
        directory: Arc::new(UserDirectory::new(pool, LockoutPolicy::default())),
        token_issuer: Some(Arc::new(issuer)),
    }
}

/// Create AppState with auth disabled (no token issuer)
pub async fn create_test_app_state_without_auth() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool: pool.clone(),
        directory: Arc::new(UserDirectory::new(pool, LockoutPolicy::default())),
        token_issuer: None,
    }
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request with a raw string body and a JSON content type
pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
