//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without an actual TCP listener. The router is built through the same
//! [`build_app_router`] the production binary uses, so tests exercise the
//! full middleware stack.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use chrono::NaiveTime;
use sqlx::PgPool;
use tower::ServiceExt;

use hrx_api::auth::jwt::{generate_access_token, JwtConfig};
use hrx_api::auth::password::hash_password;
use hrx_api::config::ServerConfig;
use hrx_api::router::build_app_router;
use hrx_api::state::AppState;
use hrx_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        workday_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        late_grace_minutes: 10,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(hrx_events::EventBus::default()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Insert a user with the given role and password; returns `(user_id, token)`.
///
/// The token is a real access token signed with the test JWT secret.
pub async fn seed_user(pool: &PgPool, username: &str, role: &str, password: &str) -> (DbId, String) {
    let role_id: (DbId,) = sqlx::query_as("SELECT id FROM roles WHERE name = $1")
        .bind(role)
        .fetch_one(pool)
        .await
        .expect("role should be seeded by migrations");

    let password_hash = hash_password(password).expect("hashing should succeed");

    let user_id: (DbId,) = sqlx::query_as(
        "INSERT INTO users (username, email, password_hash, role_id)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind(password_hash)
    .bind(role_id.0)
    .fetch_one(pool)
    .await
    .expect("user insert should succeed");

    let token = generate_access_token(user_id.0, role, &test_config().jwt)
        .expect("token generation should succeed");

    (user_id.0, token)
}

/// Insert an employee record; returns its id.
pub async fn seed_employee(
    pool: &PgPool,
    user_id: Option<DbId>,
    staff_code: &str,
    employment_status: &str,
) -> DbId {
    let id: (DbId,) = sqlx::query_as(
        "INSERT INTO employees (user_id, staff_code, full_name, hired_on, employment_status)
         VALUES ($1, $2, $3, '2024-01-15', $4) RETURNING id",
    )
    .bind(user_id)
    .bind(staff_code)
    .bind(format!("Employee {staff_code}"))
    .bind(employment_status)
    .fetch_one(pool)
    .await
    .expect("employee insert should succeed");
    id.0
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request with a Bearer token.
pub async fn get(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request without authentication.
pub async fn get_unauthed(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and no authentication.
pub async fn post_json_unauthed(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a status and return the parsed body for further checks.
pub async fn expect_status(
    response: Response<Body>,
    expected: StatusCode,
) -> serde_json::Value {
    let status = response.status();
    let body = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {body}");
    body
}
