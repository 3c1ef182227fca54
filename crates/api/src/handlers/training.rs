//! Handlers for training sessions and enrollments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrx_core::error::CoreError;
use hrx_core::training::{
    ensure_can_enroll, validate_training_capacity, validate_training_schedule,
    validate_training_transition, TRAINING_STATUS_CANCELLED, TRAINING_STATUS_DRAFT,
    TRAINING_STATUS_OPEN,
};
use hrx_core::types::DbId;
use hrx_db::models::employee::Employee;
use hrx_db::models::training::{CreateTraining, Training, UpdateTraining};
use hrx_db::repositories::{EmployeeRepo, TrainingRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireHr};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a training or fail with 404.
async fn ensure_training_exists(pool: &hrx_db::DbPool, id: DbId) -> AppResult<Training> {
    TrainingRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Training", id }))
}

/// Resolve the employee record linked to the requesting account.
async fn my_employee(pool: &hrx_db::DbPool, user: &AuthUser) -> AppResult<Employee> {
    EmployeeRepo::find_by_user_id(pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No employee record is linked to this account".into(),
            ))
        })
}

/// GET /api/v1/trainings
///
/// List all trainings, next-starting first. Any authenticated user.
pub async fn list_trainings(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let trainings = TrainingRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: trainings }))
}

/// POST /api/v1/trainings
///
/// Create a training in draft. HR/Admin.
pub async fn create_training(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Json(input): Json<CreateTraining>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Training title must not be empty".into(),
        )));
    }
    validate_training_schedule(input.starts_at, input.ends_at).map_err(AppError::Core)?;
    validate_training_capacity(input.capacity).map_err(AppError::Core)?;

    let training = TrainingRepo::create(&state.pool, &input, user.user_id).await?;

    tracing::info!(user_id = user.user_id, training_id = training.id, "Training created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: training })))
}

/// GET /api/v1/trainings/{id}
///
/// Fetch a single training. Any authenticated user.
pub async fn get_training(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let training = ensure_training_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: training }))
}

/// PUT /api/v1/trainings/{id}
///
/// Patch a draft training. HR/Admin.
pub async fn update_training(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTraining>,
) -> AppResult<impl IntoResponse> {
    let training = ensure_training_exists(&state.pool, id).await?;
    if training.status != TRAINING_STATUS_DRAFT {
        return Err(AppError::Core(CoreError::State(
            "Only draft trainings can be edited".into(),
        )));
    }

    let starts_at = input.starts_at.unwrap_or(training.starts_at);
    let ends_at = input.ends_at.unwrap_or(training.ends_at);
    validate_training_schedule(starts_at, ends_at).map_err(AppError::Core)?;
    if let Some(capacity) = input.capacity {
        validate_training_capacity(capacity).map_err(AppError::Core)?;
    }

    let training = TrainingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Training", id }))?;

    tracing::info!(user_id = user.user_id, training_id = id, "Training updated");
    Ok(Json(DataResponse { data: training }))
}

/// POST /api/v1/trainings/{id}/open
///
/// Open a draft training for enrollment. HR/Admin.
pub async fn open_training(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let training = ensure_training_exists(&state.pool, id).await?;
    validate_training_transition(&training.status, TRAINING_STATUS_OPEN)
        .map_err(AppError::Core)?;

    let training = TrainingRepo::set_status(&state.pool, id, TRAINING_STATUS_OPEN)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Training", id }))?;

    tracing::info!(user_id = user.user_id, training_id = id, "Training opened");
    Ok(Json(DataResponse { data: training }))
}

/// POST /api/v1/trainings/{id}/complete
///
/// Complete an open training; enrolled attendees are marked completed.
/// HR/Admin.
pub async fn complete_training(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let training = ensure_training_exists(&state.pool, id).await?;
    validate_training_transition(&training.status, hrx_core::training::TRAINING_STATUS_COMPLETED)
        .map_err(AppError::Core)?;

    let training = TrainingRepo::complete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Training", id }))?;

    tracing::info!(user_id = user.user_id, training_id = id, "Training completed");
    Ok(Json(DataResponse { data: training }))
}

/// POST /api/v1/trainings/{id}/cancel
///
/// Cancel a draft or open training. HR/Admin.
pub async fn cancel_training(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let training = ensure_training_exists(&state.pool, id).await?;
    validate_training_transition(&training.status, TRAINING_STATUS_CANCELLED)
        .map_err(AppError::Core)?;

    let training = TrainingRepo::set_status(&state.pool, id, TRAINING_STATUS_CANCELLED)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Training", id }))?;

    tracing::info!(user_id = user.user_id, training_id = id, "Training cancelled");
    Ok(Json(DataResponse { data: training }))
}

/// POST /api/v1/trainings/{id}/enroll
///
/// Enroll the authenticated employee. The training must be open and have
/// a free seat; duplicate enrollment is a conflict.
pub async fn enroll(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let training = ensure_training_exists(&state.pool, id).await?;
    let employee = my_employee(&state.pool, &user).await?;

    let enrolled_count = TrainingRepo::count_enrolled(&state.pool, id).await?;
    ensure_can_enroll(&training.status, enrolled_count, training.capacity)
        .map_err(AppError::Core)?;

    let enrollment = TrainingRepo::enroll(&state.pool, id, employee.id).await?;

    tracing::info!(
        user_id = user.user_id,
        training_id = id,
        employee_id = employee.id,
        "Enrolled in training"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: enrollment })))
}

/// POST /api/v1/trainings/{id}/drop
///
/// Give up the authenticated employee's seat.
pub async fn drop_enrollment(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_training_exists(&state.pool, id).await?;
    let employee = my_employee(&state.pool, &user).await?;

    let enrollment = TrainingRepo::drop_enrollment(&state.pool, id, employee.id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::State(
                "No active enrollment in this training".into(),
            ))
        })?;

    tracing::info!(
        user_id = user.user_id,
        training_id = id,
        employee_id = employee.id,
        "Dropped training enrollment"
    );

    Ok(Json(DataResponse { data: enrollment }))
}

/// GET /api/v1/trainings/{id}/enrollments
///
/// List a training's enrollments. HR/Admin.
pub async fn list_enrollments(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_training_exists(&state.pool, id).await?;
    let enrollments = TrainingRepo::list_enrollments(&state.pool, id).await?;
    Ok(Json(DataResponse { data: enrollments }))
}
