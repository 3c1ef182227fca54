//! Handlers for evaluation periods and their criteria.
//!
//! A period is created in draft, collects criteria, then opens (fanning out
//! one evaluation per rostered employee) and finally closes. Criteria are
//! editable only while the period is draft.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrx_core::criteria::{
    validate_criteria_title, validate_criteria_type, CRITERIA_TYPE_RATING,
};
use hrx_core::employee::{validate_roster_statuses, EMPLOYMENT_STATUS_ACTIVE};
use hrx_core::error::CoreError;
use hrx_core::period::{
    ensure_period_active, ensure_period_draft, validate_period_dates, validate_period_identity,
    validate_period_transition, validate_period_type, PERIOD_STATUS_ACTIVE, PERIOD_STATUS_CLOSED,
};
use hrx_core::types::DbId;
use hrx_db::models::criterion::{CreateCriterion, UpdateCriterion};
use hrx_db::models::period::{
    CreatePeriodRequest, EvaluationPeriod, SyncEvaluationsRequest, UpdatePeriod,
};
use hrx_db::repositories::{CriterionRepo, EvaluationRepo, PeriodRepo};
use hrx_events::HrEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireHr;
use crate::response::DataResponse;
use crate::state::AppState;

/// The default fan-out roster predicate: active employees only.
fn default_roster_statuses() -> Vec<String> {
    vec![EMPLOYMENT_STATUS_ACTIVE.to_string()]
}

/// Fetch a period or fail with 404.
async fn ensure_period_exists(
    pool: &hrx_db::DbPool,
    id: DbId,
) -> AppResult<EvaluationPeriod> {
    PeriodRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "EvaluationPeriod", id }))
}

// ---------------------------------------------------------------------------
// Period CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/evaluation-periods
///
/// List all periods, newest first. HR/Admin.
pub async fn list_periods(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let periods = PeriodRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: periods }))
}

/// POST /api/v1/evaluation-periods
///
/// Create a period in draft with its criteria. Indicators become
/// rating-type criteria; with none supplied the default catalog is copied.
/// When `auto_create_evaluations` is set (the default) the period is opened
/// immediately, fanning out evaluations for the active roster.
pub async fn create_period(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Json(input): Json<CreatePeriodRequest>,
) -> AppResult<impl IntoResponse> {
    validate_period_identity(&input.name, &input.period_code).map_err(AppError::Core)?;
    validate_period_type(&input.period_type).map_err(AppError::Core)?;
    validate_period_dates(
        input.start_date,
        input.end_date,
        input.self_assessment_deadline,
        input.hr_evaluation_deadline,
    )
    .map_err(AppError::Core)?;

    let mut invalid: Vec<String> = Vec::new();
    for indicator in &input.indicators {
        if let Err(e) = validate_criteria_title(&indicator.title) {
            invalid.push(e.to_string());
        }
    }
    if !invalid.is_empty() {
        return Err(AppError::Core(CoreError::validation_from(invalid)));
    }

    let period = PeriodRepo::create(&state.pool, &input, user.user_id).await?;

    if input.indicators.is_empty() {
        CriterionRepo::copy_defaults_to_period(&state.pool, period.id).await?;
    } else {
        // The bulk-creation path fixes the type to rating.
        for (index, indicator) in input.indicators.iter().enumerate() {
            let create = CreateCriterion {
                title: indicator.title.clone(),
                description: indicator.description.clone(),
                criteria_type: CRITERIA_TYPE_RATING.to_string(),
                order_index: index as i32,
            };
            CriterionRepo::create(&state.pool, Some(period.id), &create).await?;
        }
    }

    tracing::info!(
        user_id = user.user_id,
        period_id = period.id,
        period_code = %period.period_code,
        "Evaluation period created"
    );

    let period = if input.auto_create_evaluations {
        open_period_inner(&state, period, &user).await?
    } else {
        period
    };

    Ok((StatusCode::CREATED, Json(DataResponse { data: period })))
}

/// GET /api/v1/evaluation-periods/{id}
///
/// Fetch a single period. HR/Admin.
pub async fn get_period(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let period = ensure_period_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: period }))
}

/// PUT /api/v1/evaluation-periods/{id}
///
/// Patch a draft period. HR/Admin.
pub async fn update_period(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePeriod>,
) -> AppResult<impl IntoResponse> {
    let period = ensure_period_exists(&state.pool, id).await?;
    ensure_period_draft(&period.status).map_err(AppError::Core)?;

    if let Some(period_type) = &input.period_type {
        validate_period_type(period_type).map_err(AppError::Core)?;
    }

    // Validate the date window as it would look after the patch.
    let start_date = input.start_date.unwrap_or(period.start_date);
    let end_date = input.end_date.unwrap_or(period.end_date);
    let self_deadline = input
        .self_assessment_deadline
        .or(period.self_assessment_deadline);
    let hr_deadline = input
        .hr_evaluation_deadline
        .or(period.hr_evaluation_deadline);
    validate_period_dates(start_date, end_date, self_deadline, hr_deadline)
        .map_err(AppError::Core)?;

    let period = PeriodRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "EvaluationPeriod", id }))?;

    tracing::info!(user_id = user.user_id, period_id = id, "Evaluation period updated");
    Ok(Json(DataResponse { data: period }))
}

/// DELETE /api/v1/evaluation-periods/{id}
///
/// Delete a draft period; criteria and evaluations cascade. HR/Admin.
pub async fn delete_period(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let period = ensure_period_exists(&state.pool, id).await?;
    ensure_period_draft(&period.status).map_err(AppError::Core)?;

    PeriodRepo::delete(&state.pool, id).await?;

    tracing::info!(user_id = user.user_id, period_id = id, "Evaluation period deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Open a draft period: transition to active and reconcile evaluations.
///
/// Requires at least one criterion so the fan-out creates meaningful
/// answer sheets.
async fn open_period_inner(
    state: &AppState,
    period: EvaluationPeriod,
    user: &AuthUser,
) -> AppResult<EvaluationPeriod> {
    validate_period_transition(&period.status, PERIOD_STATUS_ACTIVE).map_err(AppError::Core)?;

    let criteria_count = PeriodRepo::count_criteria(&state.pool, period.id).await?;
    if criteria_count == 0 {
        return Err(AppError::Core(CoreError::State(
            "Cannot open a period with no criteria".into(),
        )));
    }

    let opened = PeriodRepo::set_status(&state.pool, period.id, PERIOD_STATUS_ACTIVE)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound { entity: "EvaluationPeriod", id: period.id })
        })?;

    let outcome =
        EvaluationRepo::sync_for_period(&state.pool, period.id, &default_roster_statuses())
            .await?;

    tracing::info!(
        user_id = user.user_id,
        period_id = period.id,
        evaluations_created = outcome.evaluations_created,
        answers_created = outcome.answers_created,
        "Evaluation period opened"
    );

    state.event_bus.publish(
        HrEvent::new("period.opened")
            .with_source("evaluation_period", period.id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({
                "evaluations_created": outcome.evaluations_created,
                "answers_created": outcome.answers_created,
            })),
    );

    Ok(opened)
}

/// POST /api/v1/evaluation-periods/{id}/open
///
/// Open a draft period. HR/Admin.
pub async fn open_period(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let period = ensure_period_exists(&state.pool, id).await?;
    let period = open_period_inner(&state, period, &user).await?;
    Ok(Json(DataResponse { data: period }))
}

/// POST /api/v1/evaluation-periods/{id}/close
///
/// Close an active period. Closing again fails with a state error and
/// changes nothing. HR/Admin.
pub async fn close_period(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let period = ensure_period_exists(&state.pool, id).await?;
    validate_period_transition(&period.status, PERIOD_STATUS_CLOSED).map_err(AppError::Core)?;

    let period = PeriodRepo::set_status(&state.pool, id, PERIOD_STATUS_CLOSED)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "EvaluationPeriod", id }))?;

    tracing::info!(user_id = user.user_id, period_id = id, "Evaluation period closed");

    state.event_bus.publish(
        HrEvent::new("period.closed")
            .with_source("evaluation_period", id)
            .with_actor(user.user_id),
    );

    Ok(Json(DataResponse { data: period }))
}

/// POST /api/v1/evaluation-periods/{id}/sync-evaluations
///
/// Re-run the evaluation fan-out for an active period, backfilling
/// employees hired after opening. Idempotent. HR/Admin.
pub async fn sync_evaluations(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SyncEvaluationsRequest>,
) -> AppResult<impl IntoResponse> {
    let period = ensure_period_exists(&state.pool, id).await?;
    ensure_period_active(&period.status).map_err(AppError::Core)?;

    let statuses = match input.include_statuses {
        Some(statuses) => {
            validate_roster_statuses(&statuses).map_err(AppError::Core)?;
            statuses
        }
        None => default_roster_statuses(),
    };

    let outcome = EvaluationRepo::sync_for_period(&state.pool, id, &statuses).await?;

    tracing::info!(
        user_id = user.user_id,
        period_id = id,
        evaluations_created = outcome.evaluations_created,
        answers_created = outcome.answers_created,
        "Evaluations synced"
    );

    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/evaluation-periods/{id}/evaluations
///
/// List every evaluation of a period. HR/Admin.
pub async fn list_period_evaluations(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_period_exists(&state.pool, id).await?;
    let evaluations = EvaluationRepo::list_for_period(&state.pool, id).await?;
    Ok(Json(DataResponse { data: evaluations }))
}

// ---------------------------------------------------------------------------
// Period criteria
// ---------------------------------------------------------------------------

/// GET /api/v1/evaluation-periods/{id}/criteria
///
/// List a period's criteria in display order. HR/Admin.
pub async fn list_criteria(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_period_exists(&state.pool, id).await?;
    let criteria = CriterionRepo::list_for_period(&state.pool, id).await?;
    Ok(Json(DataResponse { data: criteria }))
}

/// POST /api/v1/evaluation-periods/{id}/criteria
///
/// Add a criterion to a draft period. HR/Admin.
pub async fn add_criterion(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCriterion>,
) -> AppResult<impl IntoResponse> {
    let period = ensure_period_exists(&state.pool, id).await?;
    ensure_period_draft(&period.status).map_err(AppError::Core)?;
    validate_criteria_title(&input.title).map_err(AppError::Core)?;
    validate_criteria_type(&input.criteria_type).map_err(AppError::Core)?;

    let criterion = CriterionRepo::create(&state.pool, Some(id), &input).await?;

    tracing::info!(
        user_id = user.user_id,
        period_id = id,
        criterion_id = criterion.id,
        "Criterion added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: criterion })))
}

/// Fetch a criterion and check it belongs to the given period.
async fn ensure_period_criterion(
    pool: &hrx_db::DbPool,
    period_id: DbId,
    criterion_id: DbId,
) -> AppResult<()> {
    let criterion = CriterionRepo::find_by_id(pool, criterion_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound { entity: "Criterion", id: criterion_id })
        })?;
    if criterion.period_id != Some(period_id) {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Criterion",
            id: criterion_id,
        }));
    }
    Ok(())
}

/// PUT /api/v1/evaluation-periods/{id}/criteria/{cid}
///
/// Patch a criterion of a draft period. HR/Admin.
pub async fn update_criterion(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path((id, cid)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCriterion>,
) -> AppResult<impl IntoResponse> {
    let period = ensure_period_exists(&state.pool, id).await?;
    ensure_period_draft(&period.status).map_err(AppError::Core)?;
    ensure_period_criterion(&state.pool, id, cid).await?;

    if let Some(title) = &input.title {
        validate_criteria_title(title).map_err(AppError::Core)?;
    }
    if let Some(criteria_type) = &input.criteria_type {
        validate_criteria_type(criteria_type).map_err(AppError::Core)?;
    }

    let criterion = CriterionRepo::update(&state.pool, cid, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Criterion", id: cid }))?;

    tracing::info!(user_id = user.user_id, period_id = id, criterion_id = cid, "Criterion updated");
    Ok(Json(DataResponse { data: criterion }))
}

/// DELETE /api/v1/evaluation-periods/{id}/criteria/{cid}
///
/// Remove a criterion from a draft period. HR/Admin.
pub async fn delete_criterion(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path((id, cid)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let period = ensure_period_exists(&state.pool, id).await?;
    ensure_period_draft(&period.status).map_err(AppError::Core)?;
    ensure_period_criterion(&state.pool, id, cid).await?;

    CriterionRepo::delete(&state.pool, cid).await?;

    tracing::info!(user_id = user.user_id, period_id = id, criterion_id = cid, "Criterion deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Default criteria catalog
// ---------------------------------------------------------------------------

/// GET /api/v1/evaluation-criteria/defaults
///
/// List the global default criteria. HR/Admin.
pub async fn list_default_criteria(
    RequireHr(_user): RequireHr,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let criteria = CriterionRepo::list_defaults(&state.pool).await?;
    Ok(Json(DataResponse { data: criteria }))
}

/// POST /api/v1/evaluation-criteria/defaults
///
/// Add a criterion to the default catalog. HR/Admin.
pub async fn create_default_criterion(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Json(input): Json<CreateCriterion>,
) -> AppResult<impl IntoResponse> {
    validate_criteria_title(&input.title).map_err(AppError::Core)?;
    validate_criteria_type(&input.criteria_type).map_err(AppError::Core)?;

    let criterion = CriterionRepo::create(&state.pool, None, &input).await?;

    tracing::info!(user_id = user.user_id, criterion_id = criterion.id, "Default criterion created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: criterion })))
}

/// Fetch a default-catalog criterion or fail with 404.
async fn ensure_default_criterion(pool: &hrx_db::DbPool, id: DbId) -> AppResult<()> {
    let criterion = CriterionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Criterion", id }))?;
    if criterion.period_id.is_some() {
        return Err(AppError::Core(CoreError::NotFound { entity: "Criterion", id }));
    }
    Ok(())
}

/// PUT /api/v1/evaluation-criteria/defaults/{id}
///
/// Patch a default-catalog criterion. HR/Admin.
pub async fn update_default_criterion(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCriterion>,
) -> AppResult<impl IntoResponse> {
    ensure_default_criterion(&state.pool, id).await?;

    if let Some(title) = &input.title {
        validate_criteria_title(title).map_err(AppError::Core)?;
    }
    if let Some(criteria_type) = &input.criteria_type {
        validate_criteria_type(criteria_type).map_err(AppError::Core)?;
    }

    let criterion = CriterionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Criterion", id }))?;

    tracing::info!(user_id = user.user_id, criterion_id = id, "Default criterion updated");
    Ok(Json(DataResponse { data: criterion }))
}

/// DELETE /api/v1/evaluation-criteria/defaults/{id}
///
/// Remove a criterion from the default catalog. Periods that already
/// copied it are unaffected. HR/Admin.
pub async fn delete_default_criterion(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_default_criterion(&state.pool, id).await?;
    CriterionRepo::delete(&state.pool, id).await?;

    tracing::info!(user_id = user.user_id, criterion_id = id, "Default criterion deleted");
    Ok(StatusCode::NO_CONTENT)
}
