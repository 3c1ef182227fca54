//! Integration tests for employee record management.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_get_employee(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/employees",
        &hr_token,
        serde_json::json!({
            "staff_code": "EMP-001",
            "full_name": "Dana Whitfield",
            "position": "Engineer",
            "department": "Platform",
            "hired_on": "2024-01-15",
        }),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["employment_status"], "active");
    let id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(app, &format!("/api/v1/employees/{id}"), &hr_token).await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["full_name"], "Dana Whitfield");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_staff_code_conflicts(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    common::seed_employee(&pool, None, "EMP-001", "active").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/employees",
        &hr_token,
        serde_json::json!({
            "staff_code": "EMP-001",
            "full_name": "Duplicate Code",
            "hired_on": "2024-01-15",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resignation_stamps_date(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    let employee_id = common::seed_employee(&pool, None, "EMP-001", "active").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/employees/{employee_id}/status"),
        &hr_token,
        serde_json::json!({"employment_status": "resigned", "resigned_on": "2025-05-31"}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["employment_status"], "resigned");
    assert_eq!(json["data"]["resigned_on"], "2025-05-31");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_employment_status_rejected(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    let employee_id = common::seed_employee(&pool, None, "EMP-001", "active").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/employees/{employee_id}/status"),
        &hr_token,
        serde_json::json!({"employment_status": "fired"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_filter_on_listing(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    common::seed_employee(&pool, None, "EMP-001", "active").await;
    common::seed_employee(&pool, None, "EMP-002", "resigned").await;

    let app = common::build_test_app(pool.clone());
    let response =
        common::get(app, "/api/v1/employees?employment_status=active", &hr_token).await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["staff_code"], "EMP-001");

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/employees", &hr_token).await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_employee_returns_linked_record(pool: PgPool) {
    let (user_id, staff_token) =
        common::seed_user(&pool, "staffer", "staff", "password-123").await;
    common::seed_employee(&pool, Some(user_id), "EMP-001", "active").await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/me/employee", &staff_token).await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["staff_code"], "EMP-001");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_cannot_list_employees(pool: PgPool) {
    let (_id, staff_token) = common::seed_user(&pool, "staffer", "staff", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/employees", &staff_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
