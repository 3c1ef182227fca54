//! Employee evaluation and answer models.

use hrx_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employee_evaluations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeEvaluation {
    pub id: DbId,
    pub employee_id: DbId,
    pub period_id: DbId,
    pub status: String,
    pub total_score: Option<f64>,
    pub grade: Option<String>,
    pub manager_feedback: Option<String>,
    pub reviewer_id: Option<DbId>,
    pub submitted_at: Option<Timestamp>,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `evaluation_answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EvaluationAnswer {
    pub id: DbId,
    pub employee_evaluation_id: DbId,
    pub criteria_id: DbId,
    pub self_score: Option<i32>,
    pub self_note: Option<String>,
    pub hr_score: Option<i32>,
    pub hr_feedback: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An evaluation together with its answers, for detail views.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationDetail {
    #[serde(flatten)]
    pub evaluation: EmployeeEvaluation,
    pub answers: Vec<EvaluationAnswer>,
}

/// One answer item in a self-assessment submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerItem {
    /// Id of an `evaluation_answers` row belonging to this evaluation.
    pub id: DbId,
    pub self_score: Option<i32>,
    pub self_note: Option<String>,
}

/// Request body for `POST /evaluations/{id}/submit`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub answers: Vec<SubmitAnswerItem>,
}

/// One per-answer review item in an approval.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewAnswerItem {
    /// Id of an `evaluation_answers` row belonging to this evaluation.
    pub id: DbId,
    pub hr_score: Option<i32>,
    pub hr_feedback: Option<String>,
}

/// Request body for `POST /evaluations/{id}/approve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveRequest {
    pub manager_feedback: Option<String>,
    /// Optional per-answer HR scores/feedback. Stored, never blended into
    /// the total score.
    #[serde(default)]
    pub answers: Vec<ReviewAnswerItem>,
}

/// Request body for `POST /evaluations/{id}/request-revision`.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestRevisionRequest {
    pub manager_feedback: String,
}
