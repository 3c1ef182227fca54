//! Handlers for announcements.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrx_core::announcement::{validate_announcement, validate_audience, AUDIENCE_ALL, AUDIENCE_STAFF};
use hrx_core::error::CoreError;
use hrx_core::roles::ROLE_STAFF;
use hrx_core::types::DbId;
use hrx_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use hrx_db::repositories::AnnouncementRepo;
use hrx_events::HrEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireHr};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch an announcement or fail with 404.
async fn ensure_announcement_exists(
    pool: &hrx_db::DbPool,
    id: DbId,
) -> AppResult<Announcement> {
    AnnouncementRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Announcement", id }))
}

/// GET /api/v1/announcements
///
/// HR/Admin see everything including drafts; staff see published
/// announcements addressed to `all` or `staff`.
pub async fn list_announcements(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let announcements = if user.role == ROLE_STAFF {
        let audiences = vec![AUDIENCE_ALL.to_string(), AUDIENCE_STAFF.to_string()];
        AnnouncementRepo::list_published_for_audiences(&state.pool, &audiences).await?
    } else {
        AnnouncementRepo::list_all(&state.pool).await?
    };
    Ok(Json(DataResponse { data: announcements }))
}

/// POST /api/v1/announcements
///
/// Create a draft announcement. HR/Admin.
pub async fn create_announcement(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<impl IntoResponse> {
    validate_announcement(&input.title, &input.body).map_err(AppError::Core)?;
    validate_audience(&input.audience).map_err(AppError::Core)?;

    let announcement = AnnouncementRepo::create(&state.pool, &input, user.user_id).await?;

    tracing::info!(
        user_id = user.user_id,
        announcement_id = announcement.id,
        audience = %announcement.audience,
        "Announcement drafted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: announcement })))
}

/// PUT /api/v1/announcements/{id}
///
/// Patch a draft announcement. Published announcements are immutable.
/// HR/Admin.
pub async fn update_announcement(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_announcement_exists(&state.pool, id).await?;
    if existing.published_at.is_some() {
        return Err(AppError::Core(CoreError::State(
            "Published announcements cannot be edited".into(),
        )));
    }
    if let Some(audience) = &input.audience {
        validate_audience(audience).map_err(AppError::Core)?;
    }

    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Announcement", id }))?;

    tracing::info!(user_id = user.user_id, announcement_id = id, "Announcement updated");
    Ok(Json(DataResponse { data: announcement }))
}

/// POST /api/v1/announcements/{id}/publish
///
/// Publish a draft. Publishing twice is a state error. HR/Admin.
pub async fn publish_announcement(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_announcement_exists(&state.pool, id).await?;

    let announcement = AnnouncementRepo::publish(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::State(
                "Announcement is already published".into(),
            ))
        })?;

    tracing::info!(user_id = user.user_id, announcement_id = id, "Announcement published");

    state.event_bus.publish(
        HrEvent::new("announcement.published")
            .with_source("announcement", id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "audience": announcement.audience.clone() })),
    );

    Ok(Json(DataResponse { data: announcement }))
}

/// DELETE /api/v1/announcements/{id}
///
/// Delete an announcement. HR/Admin.
pub async fn delete_announcement(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_announcement_exists(&state.pool, id).await?;
    AnnouncementRepo::delete(&state.pool, id).await?;

    tracing::info!(user_id = user.user_id, announcement_id = id, "Announcement deleted");
    Ok(StatusCode::NO_CONTENT)
}
