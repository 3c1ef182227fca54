//! Evaluation period models.

use chrono::NaiveDate;
use hrx_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `evaluation_periods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EvaluationPeriod {
    pub id: DbId,
    pub name: String,
    pub period_code: String,
    pub period_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub self_assessment_deadline: Option<NaiveDate>,
    pub hr_evaluation_deadline: Option<NaiveDate>,
    pub description: Option<String>,
    pub guidelines: Option<String>,
    pub status: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /evaluation-periods`.
///
/// `indicators` become rating-type criteria on the new period; when empty,
/// the global default criteria are copied instead. When
/// `auto_create_evaluations` (default true) the period is opened
/// immediately after creation, fanning out evaluations.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePeriodRequest {
    pub name: String,
    pub period_code: String,
    pub period_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub self_assessment_deadline: Option<NaiveDate>,
    pub hr_evaluation_deadline: Option<NaiveDate>,
    pub description: Option<String>,
    pub guidelines: Option<String>,
    #[serde(default = "default_auto_create")]
    pub auto_create_evaluations: bool,
    #[serde(default)]
    pub indicators: Vec<PeriodIndicator>,
}

fn default_auto_create() -> bool {
    true
}

/// A named indicator bundled into period creation.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodIndicator {
    pub title: String,
    pub description: Option<String>,
}

/// DTO for patching a draft period. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePeriod {
    pub name: Option<String>,
    pub period_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub self_assessment_deadline: Option<NaiveDate>,
    pub hr_evaluation_deadline: Option<NaiveDate>,
    pub description: Option<String>,
    pub guidelines: Option<String>,
}

/// Request body for the evaluation sync endpoint: the roster predicate.
///
/// Defaults to active employees only when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncEvaluationsRequest {
    pub include_statuses: Option<Vec<String>>,
}

/// Result of an evaluation fan-out run.
#[derive(Debug, Clone, Serialize)]
pub struct FanOutOutcome {
    /// Evaluations inserted by this run (existing ones are untouched).
    pub evaluations_created: u64,
    /// Answers inserted by this run.
    pub answers_created: u64,
}
