//! Handlers for attendance check-in/out and HR attendance management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrx_core::attendance::{classify_check_in, validate_manual_attendance_status};
use hrx_core::error::CoreError;
use hrx_core::types::DbId;
use hrx_db::models::attendance::{AttendanceQuery, CreateManualAttendance};
use hrx_db::models::employee::Employee;
use hrx_db::repositories::{AttendanceRepo, EmployeeRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireHr};
use crate::response::DataResponse;
use crate::state::AppState;

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

/// POST /api/v1/attendance/check-in
///
/// Record today's check-in for the authenticated employee. The status is
/// `present`, or `late` past the configured workday start plus grace.
/// A second check-in on the same day is a conflict.
pub async fn check_in(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let employee = my_employee(&state.pool, &user).await?;

    let now = chrono::Utc::now();
    let status = classify_check_in(
        now.time(),
        state.config.workday_start,
        state.config.late_grace_minutes,
    );

    let record =
        AttendanceRepo::check_in(&state.pool, employee.id, now.date_naive(), status).await?;

    tracing::info!(
        user_id = user.user_id,
        employee_id = employee.id,
        status = %record.status,
        "Checked in"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// POST /api/v1/attendance/check-out
///
/// Stamp today's check-out. Fails with a state error when there is no
/// open check-in for the day.
pub async fn check_out(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let employee = my_employee(&state.pool, &user).await?;

    let today = chrono::Utc::now().date_naive();
    let record = AttendanceRepo::check_out(&state.pool, employee.id, today)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::State(
                "No open check-in to check out from today".into(),
            ))
        })?;

    tracing::info!(user_id = user.user_id, employee_id = employee.id, "Checked out");
    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/me/attendance
///
/// List the authenticated employee's attendance records, optionally
/// bounded by `?from=` / `?to=` dates.
pub async fn my_attendance(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> AppResult<impl IntoResponse> {
    let employee = my_employee(&state.pool, &user).await?;
    let records =
        AttendanceRepo::list_for_employee(&state.pool, employee.id, query.from, query.to).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/employees/{id}/attendance
///
/// List any employee's attendance records. HR/Admin.
pub async fn employee_attendance(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<AttendanceQuery>,
) -> AppResult<impl IntoResponse> {
    EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Employee", id }))?;

    let records = AttendanceRepo::list_for_employee(&state.pool, id, query.from, query.to).await?;
    Ok(Json(DataResponse { data: records }))
}

/// POST /api/v1/employees/{id}/attendance
///
/// Record an absent/on_leave day for an employee. HR/Admin. Check-derived
/// statuses cannot be recorded manually.
pub async fn record_manual_attendance(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateManualAttendance>,
) -> AppResult<impl IntoResponse> {
    EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Employee", id }))?;

    validate_manual_attendance_status(&input.status).map_err(AppError::Core)?;

    let record = AttendanceRepo::create_manual(
        &state.pool,
        id,
        input.work_date,
        &input.status,
        input.note.as_deref(),
    )
    .await?;

    tracing::info!(
        user_id = user.user_id,
        employee_id = id,
        work_date = %input.work_date,
        status = %input.status,
        "Manual attendance recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}
