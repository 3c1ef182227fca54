//! Repository for the `employee_evaluations` and `evaluation_answers` tables.
//!
//! The period fan-out and the submit/approve/revision writes are the
//! multi-row operations of the evaluation workflow; each runs inside a
//! single transaction. Status changes carry their precondition in the
//! `WHERE` clause so a concurrent writer loses cleanly instead of
//! overwriting.

use hrx_core::evaluation::{
    EVALUATION_STATUS_PENDING, EVALUATION_STATUS_REVIEWED, EVALUATION_STATUS_REVISION_REQUESTED,
    EVALUATION_STATUS_SUBMITTED,
};
use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::evaluation::{
    EmployeeEvaluation, EvaluationAnswer, ReviewAnswerItem, SubmitAnswerItem,
};
use crate::models::period::FanOutOutcome;

/// Column list for employee_evaluations queries.
const EVALUATION_COLUMNS: &str = "id, employee_id, period_id, status, total_score, grade, \
    manager_feedback, reviewer_id, submitted_at, reviewed_at, created_at, updated_at";

/// Column list for evaluation_answers queries.
const ANSWER_COLUMNS: &str = "id, employee_evaluation_id, criteria_id, self_score, self_note, \
    hr_score, hr_feedback, created_at, updated_at";

/// Provides workflow operations for employee evaluations.
pub struct EvaluationRepo;

impl EvaluationRepo {
    /// Reconcile a period's evaluations against the employee roster.
    ///
    /// Inside one transaction: insert a pending evaluation for every
    /// employee whose status matches the predicate, then an answer row for
    /// every (evaluation, criterion) pair of the period. Both inserts are
    /// keyed on their natural unique constraints with `ON CONFLICT DO
    /// NOTHING`, so the operation is idempotent and re-runnable: a partial
    /// earlier run or a roster change is backfilled without duplicates.
    pub async fn sync_for_period(
        pool: &PgPool,
        period_id: DbId,
        roster_statuses: &[String],
    ) -> Result<FanOutOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let evaluations = sqlx::query(
            "INSERT INTO employee_evaluations (employee_id, period_id)
             SELECT e.id, $1
             FROM employees e
             WHERE e.employment_status = ANY($2)
             ON CONFLICT (employee_id, period_id) DO NOTHING",
        )
        .bind(period_id)
        .bind(roster_statuses)
        .execute(&mut *tx)
        .await?;

        let answers = sqlx::query(
            "INSERT INTO evaluation_answers (employee_evaluation_id, criteria_id)
             SELECT ev.id, c.id
             FROM employee_evaluations ev
             JOIN evaluation_criteria c ON c.period_id = ev.period_id
             WHERE ev.period_id = $1
             ON CONFLICT (employee_evaluation_id, criteria_id) DO NOTHING",
        )
        .bind(period_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let outcome = FanOutOutcome {
            evaluations_created: evaluations.rows_affected(),
            answers_created: answers.rows_affected(),
        };
        tracing::debug!(
            period_id,
            evaluations_created = outcome.evaluations_created,
            answers_created = outcome.answers_created,
            "Evaluation fan-out reconciled"
        );
        Ok(outcome)
    }

    /// Find an evaluation by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EmployeeEvaluation>, sqlx::Error> {
        let query = format!("SELECT {EVALUATION_COLUMNS} FROM employee_evaluations WHERE id = $1");
        sqlx::query_as::<_, EmployeeEvaluation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all evaluations of a period.
    pub async fn list_for_period(
        pool: &PgPool,
        period_id: DbId,
    ) -> Result<Vec<EmployeeEvaluation>, sqlx::Error> {
        let query = format!(
            "SELECT {EVALUATION_COLUMNS} FROM employee_evaluations
             WHERE period_id = $1
             ORDER BY employee_id ASC"
        );
        sqlx::query_as::<_, EmployeeEvaluation>(&query)
            .bind(period_id)
            .fetch_all(pool)
            .await
    }

    /// List all evaluations of an employee, newest period first.
    pub async fn list_for_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<EmployeeEvaluation>, sqlx::Error> {
        let query = format!(
            "SELECT {EVALUATION_COLUMNS} FROM employee_evaluations
             WHERE employee_id = $1
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, EmployeeEvaluation>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// List the answers of an evaluation, in criterion order.
    pub async fn list_answers(
        pool: &PgPool,
        evaluation_id: DbId,
    ) -> Result<Vec<EvaluationAnswer>, sqlx::Error> {
        let query = format!(
            "SELECT {ANSWER_COLUMNS} FROM evaluation_answers
             WHERE employee_evaluation_id = $1
             ORDER BY criteria_id ASC"
        );
        sqlx::query_as::<_, EvaluationAnswer>(&query)
            .bind(evaluation_id)
            .fetch_all(pool)
            .await
    }

    /// Write a self-assessment and move the evaluation to `submitted`.
    ///
    /// The answer items must already be validated against this evaluation's
    /// answer set. Returns `None` when the evaluation was no longer
    /// submittable at commit time (lost race with a reviewer).
    pub async fn submit_self_assessment(
        pool: &PgPool,
        evaluation_id: DbId,
        items: &[SubmitAnswerItem],
    ) -> Result<Option<EmployeeEvaluation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE employee_evaluations
             SET status = '{EVALUATION_STATUS_SUBMITTED}', submitted_at = now(),
                 updated_at = now()
             WHERE id = $1
               AND status IN ('{EVALUATION_STATUS_PENDING}', '{EVALUATION_STATUS_REVISION_REQUESTED}')
             RETURNING {EVALUATION_COLUMNS}"
        );
        let evaluation = sqlx::query_as::<_, EmployeeEvaluation>(&query)
            .bind(evaluation_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(evaluation) = evaluation else {
            tx.rollback().await?;
            return Ok(None);
        };

        for item in items {
            sqlx::query(
                "UPDATE evaluation_answers
                 SET self_score = $2, self_note = $3, updated_at = now()
                 WHERE id = $1 AND employee_evaluation_id = $4",
            )
            .bind(item.id)
            .bind(item.self_score)
            .bind(&item.self_note)
            .bind(evaluation_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(evaluation))
    }

    /// Approve a submitted evaluation: persist optional per-answer HR
    /// review fields, then record score, grade, feedback, and reviewer.
    ///
    /// Returns `None` when the evaluation was not in `submitted` status.
    #[allow(clippy::too_many_arguments)]
    pub async fn approve(
        pool: &PgPool,
        evaluation_id: DbId,
        reviewer_id: DbId,
        manager_feedback: Option<&str>,
        review_items: &[ReviewAnswerItem],
        total_score: Option<f64>,
        grade: Option<&str>,
    ) -> Result<Option<EmployeeEvaluation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for item in review_items {
            sqlx::query(
                "UPDATE evaluation_answers
                 SET hr_score = $2, hr_feedback = $3, updated_at = now()
                 WHERE id = $1 AND employee_evaluation_id = $4",
            )
            .bind(item.id)
            .bind(item.hr_score)
            .bind(&item.hr_feedback)
            .bind(evaluation_id)
            .execute(&mut *tx)
            .await?;
        }

        let query = format!(
            "UPDATE employee_evaluations
             SET status = '{EVALUATION_STATUS_REVIEWED}', total_score = $2, grade = $3,
                 manager_feedback = $4, reviewer_id = $5, reviewed_at = now(),
                 updated_at = now()
             WHERE id = $1 AND status = '{EVALUATION_STATUS_SUBMITTED}'
             RETURNING {EVALUATION_COLUMNS}"
        );
        let evaluation = sqlx::query_as::<_, EmployeeEvaluation>(&query)
            .bind(evaluation_id)
            .bind(total_score)
            .bind(grade)
            .bind(manager_feedback)
            .bind(reviewer_id)
            .fetch_optional(&mut *tx)
            .await?;

        match evaluation {
            Some(evaluation) => {
                tx.commit().await?;
                Ok(Some(evaluation))
            }
            None => {
                tx.rollback().await?;
                Ok(None)
            }
        }
    }

    /// Send a submitted evaluation back for revision. `reviewed_at` is
    /// deliberately left null.
    ///
    /// Returns `None` when the evaluation was not in `submitted` status.
    pub async fn request_revision(
        pool: &PgPool,
        evaluation_id: DbId,
        reviewer_id: DbId,
        manager_feedback: &str,
    ) -> Result<Option<EmployeeEvaluation>, sqlx::Error> {
        let query = format!(
            "UPDATE employee_evaluations
             SET status = '{EVALUATION_STATUS_REVISION_REQUESTED}', manager_feedback = $2,
                 reviewer_id = $3, updated_at = now()
             WHERE id = $1 AND status = '{EVALUATION_STATUS_SUBMITTED}'
             RETURNING {EVALUATION_COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeEvaluation>(&query)
            .bind(evaluation_id)
            .bind(manager_feedback)
            .bind(reviewer_id)
            .fetch_optional(pool)
            .await
    }
}
