//! Evaluation criterion models.

use hrx_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `evaluation_criteria` table.
///
/// `period_id` is null for global default template rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EvaluationCriterion {
    pub id: DbId,
    pub period_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub criteria_type: String,
    pub is_default: bool,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for adding a criterion to a period or the default catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCriterion {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_criteria_type")]
    pub criteria_type: String,
    #[serde(default)]
    pub order_index: i32,
}

fn default_criteria_type() -> String {
    hrx_core::criteria::CRITERIA_TYPE_RATING.to_string()
}

/// DTO for patching a criterion. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCriterion {
    pub title: Option<String>,
    pub description: Option<String>,
    pub criteria_type: Option<String>,
    pub order_index: Option<i32>,
}
