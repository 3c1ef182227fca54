//! Repository for the `tasks` table.

use hrx_core::task::TASK_STATUS_DONE;
use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task};

/// Column list for tasks queries.
const TASK_COLUMNS: &str = "id, title, description, assignee_id, assigned_by, due_on, \
    status, completed_at, created_at, updated_at";

/// Provides CRUD and status operations for assigned tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task in `todo` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTask,
        assigned_by: DbId,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description, assignee_id, assigned_by, due_on)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.assignee_id)
            .bind(assigned_by)
            .bind(input.due_on)
            .fetch_one(pool)
            .await
    }

    /// Find a task by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks, optionally filtered by status, newest first.
    pub async fn list_all(pool: &PgPool, status: Option<&str>) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// List the tasks assigned to an employee, newest first.
    pub async fn list_for_assignee(
        pool: &PgPool,
        assignee_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE assignee_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(assignee_id)
            .fetch_all(pool)
            .await
    }

    /// Move a task to a new status, stamping `completed_at` when it
    /// reaches `done`. The transition is validated by the caller.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks
             SET status = $2,
                 completed_at = CASE WHEN $2 = '{TASK_STATUS_DONE}' THEN now() ELSE completed_at END,
                 updated_at = now()
             WHERE id = $1
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Reassign a task to another employee.
    pub async fn reassign(
        pool: &PgPool,
        id: DbId,
        assignee_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET assignee_id = $2, updated_at = now()
             WHERE id = $1
             RETURNING {TASK_COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(assignee_id)
            .fetch_optional(pool)
            .await
    }
}
