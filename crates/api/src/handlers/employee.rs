//! Handlers for the `/employees` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrx_core::employee::{
    validate_employee_identity, validate_employment_status, EMPLOYMENT_STATUS_RESIGNED,
};
use hrx_core::error::CoreError;
use hrx_core::types::DbId;
use hrx_db::models::employee::{ChangeEmploymentStatus, CreateEmployee, UpdateEmployee};
use hrx_db::repositories::EmployeeRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireHr};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the employee listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListEmployeesQuery {
    pub employment_status: Option<String>,
}

/// GET /api/v1/employees
///
/// List employees, optionally filtered by employment status. HR/Admin.
pub async fn list_employees(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &query.employment_status {
        validate_employment_status(status).map_err(AppError::Core)?;
    }
    let employees =
        EmployeeRepo::list(&state.pool, query.employment_status.as_deref()).await?;
    Ok(Json(DataResponse { data: employees }))
}

/// POST /api/v1/employees
///
/// Create an employee record, optionally linked to a user account. HR/Admin.
pub async fn create_employee(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    validate_employee_identity(&input.staff_code, &input.full_name).map_err(AppError::Core)?;

    let employee = EmployeeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        employee_id = employee.id,
        staff_code = %employee.staff_code,
        "Employee record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}

/// GET /api/v1/employees/{id}
///
/// Fetch a single employee record. HR/Admin.
pub async fn get_employee(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Employee", id }))?;
    Ok(Json(DataResponse { data: employee }))
}

/// PUT /api/v1/employees/{id}
///
/// Patch an employee record. HR/Admin.
pub async fn update_employee(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    if let Some(full_name) = &input.full_name {
        if full_name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Full name must not be empty".into(),
            )));
        }
    }
    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Employee", id }))?;

    tracing::info!(user_id = user.user_id, employee_id = id, "Employee record updated");
    Ok(Json(DataResponse { data: employee }))
}

/// POST /api/v1/employees/{id}/status
///
/// Change an employee's employment status. HR/Admin. A transition to
/// `resigned` records the resignation date (today when omitted).
pub async fn change_employment_status(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ChangeEmploymentStatus>,
) -> AppResult<impl IntoResponse> {
    validate_employment_status(&input.employment_status).map_err(AppError::Core)?;

    let resigned_on = if input.employment_status == EMPLOYMENT_STATUS_RESIGNED {
        Some(
            input
                .resigned_on
                .unwrap_or_else(|| chrono::Utc::now().date_naive()),
        )
    } else {
        None
    };

    let employee =
        EmployeeRepo::set_employment_status(&state.pool, id, &input.employment_status, resigned_on)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Employee", id }))?;

    tracing::info!(
        user_id = user.user_id,
        employee_id = id,
        employment_status = %input.employment_status,
        "Employment status changed"
    );

    Ok(Json(DataResponse { data: employee }))
}

/// GET /api/v1/me/employee
///
/// Fetch the employee record linked to the authenticated user.
pub async fn my_employee_record(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No employee record is linked to this account".into(),
            ))
        })?;
    Ok(Json(DataResponse { data: employee }))
}
