//! Repository for the `evaluation_criteria` table.

use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::criterion::{CreateCriterion, EvaluationCriterion, UpdateCriterion};

/// Column list for evaluation_criteria queries.
const CRITERION_COLUMNS: &str = "id, period_id, title, description, criteria_type, \
    is_default, order_index, created_at, updated_at";

/// Provides CRUD operations for period-scoped and default criteria.
pub struct CriterionRepo;

impl CriterionRepo {
    /// Insert a criterion. `period_id` null creates a global default row.
    pub async fn create(
        pool: &PgPool,
        period_id: Option<DbId>,
        input: &CreateCriterion,
    ) -> Result<EvaluationCriterion, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluation_criteria
                (period_id, title, description, criteria_type, is_default, order_index)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CRITERION_COLUMNS}"
        );
        sqlx::query_as::<_, EvaluationCriterion>(&query)
            .bind(period_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.criteria_type)
            .bind(period_id.is_none())
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// Find a criterion by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EvaluationCriterion>, sqlx::Error> {
        let query = format!("SELECT {CRITERION_COLUMNS} FROM evaluation_criteria WHERE id = $1");
        sqlx::query_as::<_, EvaluationCriterion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the criteria attached to a period, in display order.
    pub async fn list_for_period(
        pool: &PgPool,
        period_id: DbId,
    ) -> Result<Vec<EvaluationCriterion>, sqlx::Error> {
        let query = format!(
            "SELECT {CRITERION_COLUMNS} FROM evaluation_criteria
             WHERE period_id = $1
             ORDER BY order_index ASC, id ASC"
        );
        sqlx::query_as::<_, EvaluationCriterion>(&query)
            .bind(period_id)
            .fetch_all(pool)
            .await
    }

    /// List the global default criteria, in display order.
    pub async fn list_defaults(pool: &PgPool) -> Result<Vec<EvaluationCriterion>, sqlx::Error> {
        let query = format!(
            "SELECT {CRITERION_COLUMNS} FROM evaluation_criteria
             WHERE period_id IS NULL
             ORDER BY order_index ASC, id ASC"
        );
        sqlx::query_as::<_, EvaluationCriterion>(&query)
            .fetch_all(pool)
            .await
    }

    /// Copy the global default criteria onto a period. Returns the number
    /// of criteria created.
    pub async fn copy_defaults_to_period(
        pool: &PgPool,
        period_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO evaluation_criteria
                (period_id, title, description, criteria_type, is_default, order_index)
             SELECT $1, title, description, criteria_type, FALSE, order_index
             FROM evaluation_criteria
             WHERE period_id IS NULL",
        )
        .bind(period_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Patch a criterion row, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCriterion,
    ) -> Result<Option<EvaluationCriterion>, sqlx::Error> {
        let query = format!(
            "UPDATE evaluation_criteria SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                criteria_type = COALESCE($4, criteria_type),
                order_index = COALESCE($5, order_index),
                updated_at = now()
             WHERE id = $1
             RETURNING {CRITERION_COLUMNS}"
        );
        sqlx::query_as::<_, EvaluationCriterion>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.criteria_type)
            .bind(input.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a criterion.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM evaluation_criteria WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
