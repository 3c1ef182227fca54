//! Handlers for the employee evaluation workflow: self-assessment
//! submission and HR review.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use hrx_core::error::CoreError;
use hrx_core::evaluation::{ensure_can_review, ensure_can_submit, validate_score};
use hrx_core::period::ensure_period_not_closed;
use hrx_core::roles::ROLE_STAFF;
use hrx_core::scoring::compute_score;
use hrx_core::types::DbId;
use hrx_db::models::evaluation::{
    ApproveRequest, EmployeeEvaluation, EvaluationAnswer, EvaluationDetail,
    RequestRevisionRequest, SubmitRequest,
};
use hrx_db::repositories::{EmployeeRepo, EvaluationRepo, PeriodRepo};
use hrx_events::HrEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireHr};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch an evaluation or fail with 404.
async fn ensure_evaluation_exists(
    pool: &hrx_db::DbPool,
    id: DbId,
) -> AppResult<EmployeeEvaluation> {
    EvaluationRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound { entity: "EmployeeEvaluation", id })
        })
}

/// Reject workflow writes when the evaluation's period is already closed.
async fn ensure_period_open(pool: &hrx_db::DbPool, period_id: DbId) -> AppResult<()> {
    let period = PeriodRepo::find_by_id(pool, period_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound { entity: "EvaluationPeriod", id: period_id })
        })?;
    ensure_period_not_closed(&period.status).map_err(AppError::Core)?;
    Ok(())
}

/// Check that every submitted item references an answer row of this
/// evaluation and carries an in-range score. All offending items are
/// reported together.
fn validate_answer_items<'a, I>(items: I, answers: &[EvaluationAnswer]) -> Result<(), CoreError>
where
    I: Iterator<Item = (&'a DbId, Option<i32>)>,
{
    let mut errors: Vec<String> = Vec::new();
    for (id, score) in items {
        if !answers.iter().any(|a| a.id == *id) {
            errors.push(format!("answer {id} does not belong to this evaluation"));
        }
        if let Err(e) = validate_score(score) {
            errors.push(format!("answer {id}: {e}"));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation_from(errors))
    }
}

// ---------------------------------------------------------------------------
// Read endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/me/evaluations
///
/// List the authenticated employee's evaluations across periods.
pub async fn my_evaluations(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No employee record is linked to this account".into(),
            ))
        })?;
    let evaluations = EvaluationRepo::list_for_employee(&state.pool, employee.id).await?;
    Ok(Json(DataResponse { data: evaluations }))
}

/// GET /api/v1/evaluations/{id}
///
/// Fetch an evaluation with its answers. Accessible to the owning
/// employee and to HR/Admin.
pub async fn get_evaluation(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let evaluation = ensure_evaluation_exists(&state.pool, id).await?;

    if user.role == ROLE_STAFF {
        ensure_owned_by(&state.pool, &evaluation, &user).await?;
    }

    let answers = EvaluationRepo::list_answers(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: EvaluationDetail { evaluation, answers },
    }))
}

/// Check the evaluation belongs to the requesting user's employee record.
async fn ensure_owned_by(
    pool: &hrx_db::DbPool,
    evaluation: &EmployeeEvaluation,
    user: &AuthUser,
) -> AppResult<()> {
    let employee = EmployeeRepo::find_by_user_id(pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No employee record is linked to this account".into(),
            ))
        })?;
    if evaluation.employee_id != employee.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "This evaluation belongs to another employee".into(),
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Workflow endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/evaluations/{id}/submit
///
/// Submit (or resubmit) a self-assessment. The evaluation must belong to
/// the requesting employee; every answer item must reference this
/// evaluation's answer sheet. Invalid items fail the whole request with an
/// aggregated validation error and no partial writes.
pub async fn submit_self_assessment(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let evaluation = ensure_evaluation_exists(&state.pool, id).await?;
    ensure_owned_by(&state.pool, &evaluation, &user).await?;
    ensure_can_submit(&evaluation.status).map_err(AppError::Core)?;
    ensure_period_open(&state.pool, evaluation.period_id).await?;

    let answers = EvaluationRepo::list_answers(&state.pool, id).await?;
    validate_answer_items(
        input.answers.iter().map(|item| (&item.id, item.self_score)),
        &answers,
    )
    .map_err(AppError::Core)?;

    let evaluation = EvaluationRepo::submit_self_assessment(&state.pool, id, &input.answers)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::State(
                "Evaluation is no longer accepting submissions".into(),
            ))
        })?;

    tracing::info!(
        user_id = user.user_id,
        evaluation_id = id,
        answers = input.answers.len(),
        "Self-assessment submitted"
    );

    state.event_bus.publish(
        HrEvent::new("evaluation.submitted")
            .with_source("employee_evaluation", id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "period_id": evaluation.period_id })),
    );

    Ok(Json(DataResponse { data: evaluation }))
}

/// POST /api/v1/evaluations/{id}/approve
///
/// Approve a submitted evaluation: optionally persist per-answer HR
/// review fields, compute the total score and grade from the employee's
/// self scores, and mark the evaluation reviewed. HR/Admin.
pub async fn approve(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApproveRequest>,
) -> AppResult<impl IntoResponse> {
    let evaluation = ensure_evaluation_exists(&state.pool, id).await?;
    ensure_can_review(&evaluation.status).map_err(AppError::Core)?;
    ensure_period_open(&state.pool, evaluation.period_id).await?;

    let answers = EvaluationRepo::list_answers(&state.pool, id).await?;
    validate_answer_items(
        input.answers.iter().map(|item| (&item.id, item.hr_score)),
        &answers,
    )
    .map_err(AppError::Core)?;

    // Scoring uses self scores only; HR scores are stored, not blended.
    let self_scores: Vec<Option<i32>> = answers.iter().map(|a| a.self_score).collect();
    let summary = compute_score(&self_scores);

    let evaluation = EvaluationRepo::approve(
        &state.pool,
        id,
        user.user_id,
        input.manager_feedback.as_deref(),
        &input.answers,
        summary.total_score,
        summary.grade.as_deref(),
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::State(
            "Evaluation is no longer awaiting review".into(),
        ))
    })?;

    tracing::info!(
        reviewer_id = user.user_id,
        evaluation_id = id,
        total_score = ?evaluation.total_score,
        grade = ?evaluation.grade,
        "Evaluation approved"
    );

    state.event_bus.publish(
        HrEvent::new("evaluation.reviewed")
            .with_source("employee_evaluation", id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({
                "total_score": evaluation.total_score,
                "grade": evaluation.grade.clone(),
            })),
    );

    Ok(Json(DataResponse { data: evaluation }))
}

/// POST /api/v1/evaluations/{id}/request-revision
///
/// Send a submitted evaluation back to the employee for revision.
/// `reviewed_at` stays null; the employee resubmits through the normal
/// submission path. HR/Admin.
pub async fn request_revision(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RequestRevisionRequest>,
) -> AppResult<impl IntoResponse> {
    let evaluation = ensure_evaluation_exists(&state.pool, id).await?;
    ensure_can_review(&evaluation.status).map_err(AppError::Core)?;
    ensure_period_open(&state.pool, evaluation.period_id).await?;

    if input.manager_feedback.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Revision requests must include manager feedback".into(),
        )));
    }

    let evaluation =
        EvaluationRepo::request_revision(&state.pool, id, user.user_id, &input.manager_feedback)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::State(
                    "Evaluation is no longer awaiting review".into(),
                ))
            })?;

    tracing::info!(
        reviewer_id = user.user_id,
        evaluation_id = id,
        "Revision requested"
    );

    state.event_bus.publish(
        HrEvent::new("evaluation.revision_requested")
            .with_source("employee_evaluation", id)
            .with_actor(user.user_id),
    );

    Ok(Json(DataResponse { data: evaluation }))
}
