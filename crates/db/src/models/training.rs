//! Training session and enrollment models.

use hrx_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `trainings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Training {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub trainer: Option<String>,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub capacity: i32,
    pub status: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `training_enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainingEnrollment {
    pub id: DbId,
    pub training_id: DbId,
    pub employee_id: DbId,
    pub status: String,
    pub enrolled_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// Request body for creating a training.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTraining {
    pub title: String,
    pub description: Option<String>,
    pub trainer: Option<String>,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub capacity: i32,
}

/// DTO for patching a draft training. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTraining {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trainer: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub capacity: Option<i32>,
}
