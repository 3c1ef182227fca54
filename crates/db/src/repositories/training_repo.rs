//! Repository for the `trainings` and `training_enrollments` tables.

use hrx_core::training::{
    ENROLLMENT_STATUS_COMPLETED, ENROLLMENT_STATUS_DROPPED, ENROLLMENT_STATUS_ENROLLED,
    TRAINING_STATUS_COMPLETED,
};
use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::training::{CreateTraining, Training, TrainingEnrollment, UpdateTraining};

/// Column list for trainings queries.
const TRAINING_COLUMNS: &str = "id, title, description, trainer, location, starts_at, \
    ends_at, capacity, status, created_by, created_at, updated_at";

/// Column list for training_enrollments queries.
const ENROLLMENT_COLUMNS: &str =
    "id, training_id, employee_id, status, enrolled_at, completed_at";

/// Provides lifecycle and enrollment operations for training sessions.
pub struct TrainingRepo;

impl TrainingRepo {
    /// Insert a new training in `draft` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTraining,
        created_by: DbId,
    ) -> Result<Training, sqlx::Error> {
        let query = format!(
            "INSERT INTO trainings
                (title, description, trainer, location, starts_at, ends_at, capacity, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {TRAINING_COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trainer)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(input.capacity)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a training by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Training>, sqlx::Error> {
        let query = format!("SELECT {TRAINING_COLUMNS} FROM trainings WHERE id = $1");
        sqlx::query_as::<_, Training>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all trainings, next-starting first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Training>, sqlx::Error> {
        let query = format!("SELECT {TRAINING_COLUMNS} FROM trainings ORDER BY starts_at DESC");
        sqlx::query_as::<_, Training>(&query).fetch_all(pool).await
    }

    /// Patch a training row, returning the updated row. The draft-only
    /// guard is enforced by the caller.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTraining,
    ) -> Result<Option<Training>, sqlx::Error> {
        let query = format!(
            "UPDATE trainings SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                trainer = COALESCE($4, trainer),
                location = COALESCE($5, location),
                starts_at = COALESCE($6, starts_at),
                ends_at = COALESCE($7, ends_at),
                capacity = COALESCE($8, capacity),
                updated_at = now()
             WHERE id = $1
             RETURNING {TRAINING_COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trainer)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(input.capacity)
            .fetch_optional(pool)
            .await
    }

    /// Move a training to a new status. The transition is validated by
    /// the caller.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Training>, sqlx::Error> {
        let query = format!(
            "UPDATE trainings SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {TRAINING_COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Complete a training and mark all its enrolled attendees completed,
    /// in one transaction.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<Option<Training>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE trainings SET status = '{TRAINING_STATUS_COMPLETED}', updated_at = now()
             WHERE id = $1
             RETURNING {TRAINING_COLUMNS}"
        );
        let training = sqlx::query_as::<_, Training>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if training.is_some() {
            sqlx::query(&format!(
                "UPDATE training_enrollments
                 SET status = '{ENROLLMENT_STATUS_COMPLETED}', completed_at = now()
                 WHERE training_id = $1 AND status = '{ENROLLMENT_STATUS_ENROLLED}'"
            ))
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(training)
    }

    /// Count the seats currently held on a training.
    pub async fn count_enrolled(pool: &PgPool, training_id: DbId) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM training_enrollments
             WHERE training_id = $1 AND status = '{ENROLLMENT_STATUS_ENROLLED}'"
        );
        let row: (i64,) = sqlx::query_as(&query).bind(training_id).fetch_one(pool).await?;
        Ok(row.0)
    }

    /// Enroll an employee. The unique constraint on (training_id,
    /// employee_id) rejects a duplicate enrollment as a conflict.
    pub async fn enroll(
        pool: &PgPool,
        training_id: DbId,
        employee_id: DbId,
    ) -> Result<TrainingEnrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO training_enrollments (training_id, employee_id)
             VALUES ($1, $2)
             RETURNING {ENROLLMENT_COLUMNS}"
        );
        sqlx::query_as::<_, TrainingEnrollment>(&query)
            .bind(training_id)
            .bind(employee_id)
            .fetch_one(pool)
            .await
    }

    /// Drop an employee's active enrollment. Returns `None` when there is
    /// no active enrollment to drop.
    pub async fn drop_enrollment(
        pool: &PgPool,
        training_id: DbId,
        employee_id: DbId,
    ) -> Result<Option<TrainingEnrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE training_enrollments
             SET status = '{ENROLLMENT_STATUS_DROPPED}'
             WHERE training_id = $1 AND employee_id = $2
               AND status = '{ENROLLMENT_STATUS_ENROLLED}'
             RETURNING {ENROLLMENT_COLUMNS}"
        );
        sqlx::query_as::<_, TrainingEnrollment>(&query)
            .bind(training_id)
            .bind(employee_id)
            .fetch_optional(pool)
            .await
    }

    /// List all enrollments of a training.
    pub async fn list_enrollments(
        pool: &PgPool,
        training_id: DbId,
    ) -> Result<Vec<TrainingEnrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {ENROLLMENT_COLUMNS} FROM training_enrollments
             WHERE training_id = $1
             ORDER BY enrolled_at ASC"
        );
        sqlx::query_as::<_, TrainingEnrollment>(&query)
            .bind(training_id)
            .fetch_all(pool)
            .await
    }
}
