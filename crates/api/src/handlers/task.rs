//! Handlers for assigned tasks.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrx_core::error::CoreError;
use hrx_core::roles::ROLE_STAFF;
use hrx_core::task::{
    validate_task_status, validate_task_title, validate_task_transition, TASK_STATUS_CANCELLED,
};
use hrx_core::types::DbId;
use hrx_db::models::task::{ChangeTaskStatus, CreateTask, ReassignTask, Task};
use hrx_db::repositories::{EmployeeRepo, TaskRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireHr};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the task listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<String>,
}

/// Fetch a task or fail with 404.
async fn ensure_task_exists(pool: &hrx_db::DbPool, id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Task", id }))
}

/// GET /api/v1/tasks
///
/// List all tasks, optionally filtered by status. HR/Admin.
pub async fn list_tasks(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &query.status {
        validate_task_status(status).map_err(AppError::Core)?;
    }
    let tasks = TaskRepo::list_all(&state.pool, query.status.as_deref()).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// POST /api/v1/tasks
///
/// Create a task assigned to an employee. HR/Admin.
pub async fn create_task(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    validate_task_title(&input.title).map_err(AppError::Core)?;

    EmployeeRepo::find_by_id(&state.pool, input.assignee_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound { entity: "Employee", id: input.assignee_id })
        })?;

    let task = TaskRepo::create(&state.pool, &input, user.user_id).await?;

    tracing::info!(
        user_id = user.user_id,
        task_id = task.id,
        assignee_id = task.assignee_id,
        "Task created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// GET /api/v1/me/tasks
///
/// List the authenticated employee's tasks.
pub async fn my_tasks(
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
    let tasks = TaskRepo::list_for_assignee(&state.pool, employee.id).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/tasks/{id}
///
/// Fetch a single task. Accessible to the assignee and to HR/Admin.
pub async fn get_task(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = ensure_task_exists(&state.pool, id).await?;
    if user.role == ROLE_STAFF {
        ensure_assigned_to(&state.pool, &task, &user).await?;
    }
    Ok(Json(DataResponse { data: task }))
}

/// Check the task is assigned to the requesting user's employee record.
async fn ensure_assigned_to(
    pool: &hrx_db::DbPool,
    task: &Task,
    user: &AuthUser,
) -> AppResult<()> {
    let employee = EmployeeRepo::find_by_user_id(pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No employee record is linked to this account".into(),
            ))
        })?;
    if task.assignee_id != employee.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "This task is assigned to another employee".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/tasks/{id}/status
///
/// Move a task through its lifecycle. Assignees may advance their own
/// tasks; cancellation is reserved for HR/Admin.
pub async fn change_task_status(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ChangeTaskStatus>,
) -> AppResult<impl IntoResponse> {
    validate_task_status(&input.status).map_err(AppError::Core)?;

    let task = ensure_task_exists(&state.pool, id).await?;

    if user.role == ROLE_STAFF {
        ensure_assigned_to(&state.pool, &task, &user).await?;
        if input.status == TASK_STATUS_CANCELLED {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only HR or Admin may cancel a task".into(),
            )));
        }
    }

    validate_task_transition(&task.status, &input.status).map_err(AppError::Core)?;

    let task = TaskRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    tracing::info!(
        user_id = user.user_id,
        task_id = id,
        status = %task.status,
        "Task status changed"
    );

    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/tasks/{id}/reassign
///
/// Move a task to another employee. HR/Admin.
pub async fn reassign_task(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReassignTask>,
) -> AppResult<impl IntoResponse> {
    ensure_task_exists(&state.pool, id).await?;

    EmployeeRepo::find_by_id(&state.pool, input.assignee_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound { entity: "Employee", id: input.assignee_id })
        })?;

    let task = TaskRepo::reassign(&state.pool, id, input.assignee_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    tracing::info!(
        user_id = user.user_id,
        task_id = id,
        assignee_id = input.assignee_id,
        "Task reassigned"
    );

    Ok(Json(DataResponse { data: task }))
}
