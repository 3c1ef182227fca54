//! Repository for the `evaluation_periods` table.

use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::period::{CreatePeriodRequest, EvaluationPeriod, UpdatePeriod};

/// Column list for evaluation_periods queries.
const PERIOD_COLUMNS: &str = "id, name, period_code, period_type, start_date, end_date, \
    self_assessment_deadline, hr_evaluation_deadline, description, guidelines, status, \
    created_by, created_at, updated_at";

/// Provides CRUD and status operations for evaluation periods.
pub struct PeriodRepo;

impl PeriodRepo {
    /// Insert a new period in `draft` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePeriodRequest,
        created_by: DbId,
    ) -> Result<EvaluationPeriod, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluation_periods
                (name, period_code, period_type, start_date, end_date,
                 self_assessment_deadline, hr_evaluation_deadline, description,
                 guidelines, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {PERIOD_COLUMNS}"
        );
        sqlx::query_as::<_, EvaluationPeriod>(&query)
            .bind(&input.name)
            .bind(&input.period_code)
            .bind(&input.period_type)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.self_assessment_deadline)
            .bind(input.hr_evaluation_deadline)
            .bind(&input.description)
            .bind(&input.guidelines)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a period by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EvaluationPeriod>, sqlx::Error> {
        let query = format!("SELECT {PERIOD_COLUMNS} FROM evaluation_periods WHERE id = $1");
        sqlx::query_as::<_, EvaluationPeriod>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all periods, newest start date first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<EvaluationPeriod>, sqlx::Error> {
        let query = format!(
            "SELECT {PERIOD_COLUMNS} FROM evaluation_periods ORDER BY start_date DESC, id DESC"
        );
        sqlx::query_as::<_, EvaluationPeriod>(&query)
            .fetch_all(pool)
            .await
    }

    /// Patch a period row, returning the updated row. The draft-only guard
    /// is enforced by the caller before this runs.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePeriod,
    ) -> Result<Option<EvaluationPeriod>, sqlx::Error> {
        let query = format!(
            "UPDATE evaluation_periods SET
                name = COALESCE($2, name),
                period_type = COALESCE($3, period_type),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                self_assessment_deadline = COALESCE($6, self_assessment_deadline),
                hr_evaluation_deadline = COALESCE($7, hr_evaluation_deadline),
                description = COALESCE($8, description),
                guidelines = COALESCE($9, guidelines),
                updated_at = now()
             WHERE id = $1
             RETURNING {PERIOD_COLUMNS}"
        );
        sqlx::query_as::<_, EvaluationPeriod>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.period_type)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.self_assessment_deadline)
            .bind(input.hr_evaluation_deadline)
            .bind(&input.description)
            .bind(&input.guidelines)
            .fetch_optional(pool)
            .await
    }

    /// Move a period to a new status. The transition is validated by the
    /// caller against the current status.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<EvaluationPeriod>, sqlx::Error> {
        let query = format!(
            "UPDATE evaluation_periods SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {PERIOD_COLUMNS}"
        );
        sqlx::query_as::<_, EvaluationPeriod>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a draft period. Criteria and evaluations cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM evaluation_periods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the criteria attached to a period.
    pub async fn count_criteria(pool: &PgPool, period_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM evaluation_criteria WHERE period_id = $1")
                .bind(period_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
