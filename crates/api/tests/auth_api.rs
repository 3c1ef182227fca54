//! Integration tests for authentication and RBAC enforcement.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_with_valid_credentials(pool: PgPool) {
    common::seed_user(&pool, "dana", "hr", "a-strong-password").await;

    let app = common::build_test_app(pool);
    let response = common::post_json_unauthed(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "dana", "password": "a-strong-password"}),
    )
    .await;

    let json = common::expect_status(response, StatusCode::OK).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["username"], "dana");
    assert_eq!(json["user"]["role"], "hr");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_with_wrong_password_fails(pool: PgPool) {
    common::seed_user(&pool, "dana", "staff", "a-strong-password").await;

    let app = common::build_test_app(pool);
    let response = common::post_json_unauthed(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "dana", "password": "not-the-password"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user_fails(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json_unauthed(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "nobody", "password": "whatever-password"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Refresh rotation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_tokens(pool: PgPool) {
    common::seed_user(&pool, "dana", "staff", "a-strong-password").await;

    let app = common::build_test_app(pool.clone());
    let login = common::post_json_unauthed(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "dana", "password": "a-strong-password"}),
    )
    .await;
    let login_body = common::expect_status(login, StatusCode::OK).await;
    let refresh_token = login_body["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and returns a new pair.
    let app = common::build_test_app(pool.clone());
    let refreshed = common::post_json_unauthed(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    let refreshed_body = common::expect_status(refreshed, StatusCode::OK).await;
    assert_ne!(refreshed_body["refresh_token"], login_body["refresh_token"]);

    // The old refresh token was revoked by rotation.
    let app = common::build_test_app(pool);
    let reused = common::post_json_unauthed(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(reused.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let (_user_id, token) = common::seed_user(&pool, "dana", "staff", "a-strong-password").await;

    let app = common::build_test_app(pool.clone());
    let login = common::post_json_unauthed(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "dana", "password": "a-strong-password"}),
    )
    .await;
    let login_body = common::expect_status(login, StatusCode::OK).await;
    let refresh_token = login_body["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let logout = common::post_json(app, "/api/v1/auth/logout", &token, serde_json::json!({})).await;
    assert_eq!(logout.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let refreshed = common::post_json_unauthed(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(refreshed.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get_unauthed(app, "/api/v1/admin/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_cannot_access_admin_routes(pool: PgPool) {
    let (_id, staff_token) = common::seed_user(&pool, "staffer", "staff", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/admin/users", &staff_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hr_cannot_access_admin_routes(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/admin/users", &hr_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_cannot_create_periods(pool: PgPool) {
    let (_id, staff_token) = common::seed_user(&pool, "staffer", "staff", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &staff_token,
        serde_json::json!({
            "name": "Q1 Review",
            "period_code": "Q1-2025",
            "period_type": "quarterly",
            "start_date": "2025-01-01",
            "end_date": "2025-03-31",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_creates_user(pool: PgPool) {
    let (_id, admin_token) = common::seed_user(&pool, "root", "admin", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/admin/users",
        &admin_token,
        serde_json::json!({
            "username": "newbie",
            "email": "newbie@example.com",
            "password": "long-enough-password",
            "role": "staff",
        }),
    )
    .await;

    let json = common::expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["username"], "newbie");
    // The password hash must never be serialized.
    assert!(json["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_with_short_password_fails(pool: PgPool) {
    let (_id, admin_token) = common::seed_user(&pool, "root", "admin", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/admin/users",
        &admin_token,
        serde_json::json!({
            "username": "newbie",
            "email": "newbie@example.com",
            "password": "short",
            "role": "staff",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_conflicts(pool: PgPool) {
    let (_id, admin_token) = common::seed_user(&pool, "root", "admin", "password-123").await;
    common::seed_user(&pool, "taken", "staff", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/admin/users",
        &admin_token,
        serde_json::json!({
            "username": "taken",
            "email": "other@example.com",
            "password": "long-enough-password",
            "role": "staff",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
