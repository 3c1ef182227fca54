//! Task assignment models.

use chrono::NaiveDate;
use hrx_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: DbId,
    pub assigned_by: DbId,
    pub due_on: Option<NaiveDate>,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: DbId,
    pub due_on: Option<NaiveDate>,
}

/// Request body for a task status change.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeTaskStatus {
    pub status: String,
}

/// Request body for reassigning a task.
#[derive(Debug, Clone, Deserialize)]
pub struct ReassignTask {
    pub assignee_id: DbId,
}
