//! Integration tests for training lifecycle and enrollment.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

/// Seed HR + staff-with-employee; create an open training with the given
/// capacity. Returns `(hr_token, staff_token, training_id)`.
async fn seed_open_training(pool: &PgPool, capacity: i32) -> (String, String, i64) {
    let (_hr_id, hr_token) = common::seed_user(pool, "hr-user", "hr", "password-123").await;
    let (staff_id, staff_token) =
        common::seed_user(pool, "staffer", "staff", "password-123").await;
    common::seed_employee(pool, Some(staff_id), "EMP-001", "active").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/trainings",
        &hr_token,
        serde_json::json!({
            "title": "Security awareness",
            "trainer": "J. Mercer",
            "starts_at": "2025-06-01T09:00:00Z",
            "ends_at": "2025-06-01T17:00:00Z",
            "capacity": capacity,
        }),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["status"], "draft");
    let training_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/open"),
        &hr_token,
        serde_json::json!({}),
    )
    .await;
    common::expect_status(response, StatusCode::OK).await;

    (hr_token, staff_token, training_id)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schedule_window_is_validated(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/trainings",
        &hr_token,
        serde_json::json!({
            "title": "Backwards",
            "starts_at": "2025-06-01T17:00:00Z",
            "ends_at": "2025-06-01T09:00:00Z",
            "capacity": 10,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enrollment_requires_open_training(pool: PgPool) {
    let (_hr_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    let (staff_id, staff_token) =
        common::seed_user(&pool, "staffer", "staff", "password-123").await;
    common::seed_employee(&pool, Some(staff_id), "EMP-001", "active").await;

    // Draft training: enrollment is a state error.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/trainings",
        &hr_token,
        serde_json::json!({
            "title": "Draft only",
            "starts_at": "2025-06-01T09:00:00Z",
            "ends_at": "2025-06-01T17:00:00Z",
            "capacity": 10,
        }),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    let training_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/enroll"),
        &staff_token,
        serde_json::json!({}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "STATE_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enroll_and_duplicate_conflicts(pool: PgPool) {
    let (_hr_token, staff_token, training_id) = seed_open_training(&pool, 10).await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/enroll"),
        &staff_token,
        serde_json::json!({}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["status"], "enrolled");

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/enroll"),
        &staff_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_training_rejects_enrollment(pool: PgPool) {
    let (_hr_token, staff_token, training_id) = seed_open_training(&pool, 1).await;

    // Another employee takes the only seat directly.
    let other = common::seed_employee(&pool, None, "EMP-002", "active").await;
    sqlx::query("INSERT INTO training_enrollments (training_id, employee_id) VALUES ($1, $2)")
        .bind(training_id)
        .bind(other)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/enroll"),
        &staff_token,
        serde_json::json!({}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CONFLICT).await;
    assert!(json["error"].as_str().unwrap().contains("full"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_drop_frees_the_seat(pool: PgPool) {
    let (_hr_token, staff_token, training_id) = seed_open_training(&pool, 1).await;

    let app = common::build_test_app(pool.clone());
    common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/enroll"),
        &staff_token,
        serde_json::json!({}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/drop"),
        &staff_token,
        serde_json::json!({}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "dropped");

    // Dropping again is a state error.
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/drop"),
        &staff_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completing_training_completes_enrollments(pool: PgPool) {
    let (hr_token, staff_token, training_id) = seed_open_training(&pool, 5).await;

    let app = common::build_test_app(pool.clone());
    common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/enroll"),
        &staff_token,
        serde_json::json!({}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/complete"),
        &hr_token,
        serde_json::json!({}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "completed");

    let app = common::build_test_app(pool);
    let response = common::get(
        app,
        &format!("/api/v1/trainings/{training_id}/enrollments"),
        &hr_token,
    )
    .await;
    let json = common::expect_status(response, StatusCode::OK).await;
    let enrollments = json["data"].as_array().unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0]["status"], "completed");
    assert!(!enrollments[0]["completed_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completed_training_cannot_reopen(pool: PgPool) {
    let (hr_token, _staff_token, training_id) = seed_open_training(&pool, 5).await;

    let app = common::build_test_app(pool.clone());
    common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/complete"),
        &hr_token,
        serde_json::json!({}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/trainings/{training_id}/open"),
        &hr_token,
        serde_json::json!({}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "STATE_ERROR");
}
