//! Integration tests for the evaluation period lifecycle.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

/// Standard period payload; callers override fields as needed.
fn period_payload(code: &str, auto_create: bool) -> serde_json::Value {
    serde_json::json!({
        "name": "Q1 Review",
        "period_code": code,
        "period_type": "quarterly",
        "start_date": "2025-01-01",
        "end_date": "2025-03-31",
        "self_assessment_deadline": "2025-03-15",
        "hr_evaluation_deadline": "2025-03-25",
        "auto_create_evaluations": auto_create,
        "indicators": [
            {"title": "Teamwork"},
            {"title": "Delivery", "description": "Output quality and pace"},
        ],
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_period_with_indicators_auto_opens(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    common::seed_employee(&pool, None, "EMP-001", "active").await;
    common::seed_employee(&pool, None, "EMP-002", "active").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &hr_token,
        period_payload("Q1-2025", true),
    )
    .await;

    let json = common::expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["status"], "active");
    let period_id = json["data"]["id"].as_i64().unwrap();

    // Two active employees and two criteria: 2 evaluations, 4 answers.
    let app = common::build_test_app(pool);
    let response = common::get(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}/evaluations"),
        &hr_token,
    )
    .await;
    let json = common::expect_status(response, StatusCode::OK).await;
    let evaluations = json["data"].as_array().unwrap();
    assert_eq!(evaluations.len(), 2);
    for evaluation in evaluations {
        assert_eq!(evaluation["status"], "pending");
        assert!(evaluation["total_score"].is_null());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_period_without_auto_open_stays_draft(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &hr_token,
        period_payload("Q1-2025", false),
    )
    .await;

    let json = common::expect_status(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["status"], "draft");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_end_date_equal_to_start_date_fails(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    let app = common::build_test_app(pool);
    let mut payload = period_payload("Q1-2025", false);
    payload["end_date"] = serde_json::json!("2025-01-01");
    payload["self_assessment_deadline"] = serde_json::Value::Null;
    payload["hr_evaluation_deadline"] = serde_json::Value::Null;

    let response =
        common::post_json(app, "/api/v1/evaluation-periods", &hr_token, payload).await;
    let json = common::expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_misordered_deadlines_fail(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    let app = common::build_test_app(pool);
    let mut payload = period_payload("Q1-2025", false);
    payload["self_assessment_deadline"] = serde_json::json!("2025-03-20");
    payload["hr_evaluation_deadline"] = serde_json::json!("2025-03-10");

    let response =
        common::post_json(app, "/api/v1/evaluation-periods", &hr_token, payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_period_code_conflicts(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    let app = common::build_test_app(pool.clone());
    let first = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &hr_token,
        period_payload("Q1-2025", false),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &hr_token,
        period_payload("Q1-2025", false),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_open_requires_criteria(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    // No indicators and an empty default catalog: the period has no criteria.
    let app = common::build_test_app(pool.clone());
    let mut payload = period_payload("Q1-2025", false);
    payload["indicators"] = serde_json::json!([]);
    let response =
        common::post_json(app, "/api/v1/evaluation-periods", &hr_token, payload).await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    let period_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}/open"),
        &hr_token,
        serde_json::json!({}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "STATE_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_close_twice_is_state_error_without_changes(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    common::seed_employee(&pool, None, "EMP-001", "active").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &hr_token,
        period_payload("Q1-2025", true),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    let period_id = json["data"]["id"].as_i64().unwrap();

    // First close succeeds.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}/close"),
        &hr_token,
        serde_json::json!({}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "closed");

    // Second close is a state error and changes nothing.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}/close"),
        &hr_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = common::get(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}"),
        &hr_token,
    )
    .await;
    let json = common::expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "closed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_criteria_are_frozen_outside_draft(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    common::seed_employee(&pool, None, "EMP-001", "active").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &hr_token,
        period_payload("Q1-2025", true),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    let period_id = json["data"]["id"].as_i64().unwrap();

    // The period is active; adding a criterion must fail.
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}/criteria"),
        &hr_token,
        serde_json::json!({"title": "Initiative"}),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "STATE_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_period_delete_cascades(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &hr_token,
        period_payload("Q1-2025", false),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    let period_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::delete(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}"),
        &hr_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let criteria_count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM evaluation_criteria WHERE period_id = $1")
            .bind(period_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(criteria_count.0, 0, "criteria must be cascade-deleted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_period_cannot_be_deleted(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;
    common::seed_employee(&pool, None, "EMP-001", "active").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/evaluation-periods",
        &hr_token,
        period_payload("Q1-2025", true),
    )
    .await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    let period_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = common::delete(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}"),
        &hr_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_indicators_copy_default_catalog(pool: PgPool) {
    let (_id, hr_token) = common::seed_user(&pool, "hr-user", "hr", "password-123").await;

    // Seed two default criteria.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/evaluation-criteria/defaults",
        &hr_token,
        serde_json::json!({"title": "Communication"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/evaluation-criteria/defaults",
        &hr_token,
        serde_json::json!({"title": "Reliability", "criteria_type": "number"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Creating a period without indicators copies them.
    let app = common::build_test_app(pool.clone());
    let mut payload = period_payload("Q1-2025", false);
    payload["indicators"] = serde_json::json!([]);
    let response =
        common::post_json(app, "/api/v1/evaluation-periods", &hr_token, payload).await;
    let json = common::expect_status(response, StatusCode::CREATED).await;
    let period_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(
        app,
        &format!("/api/v1/evaluation-periods/{period_id}/criteria"),
        &hr_token,
    )
    .await;
    let json = common::expect_status(response, StatusCode::OK).await;
    let criteria = json["data"].as_array().unwrap();
    assert_eq!(criteria.len(), 2);
    assert!(criteria.iter().all(|c| c["is_default"] == false));
}
