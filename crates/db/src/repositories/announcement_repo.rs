//! Repository for the `announcements` table.

use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

/// Column list for announcements queries.
const ANNOUNCEMENT_COLUMNS: &str =
    "id, title, body, audience, published_at, created_by, created_at, updated_at";

/// Provides CRUD and publish operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert a new draft announcement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnouncement,
        created_by: DbId,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (title, body, audience, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.audience)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an announcement by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!("SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements WHERE id = $1");
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every announcement (drafts included), newest first. HR view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Announcement>(&query).fetch_all(pool).await
    }

    /// List published announcements visible to the given audiences,
    /// newest first.
    pub async fn list_published_for_audiences(
        pool: &PgPool,
        audiences: &[String],
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements
             WHERE published_at IS NOT NULL AND audience = ANY($1)
             ORDER BY published_at DESC"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(audiences)
            .fetch_all(pool)
            .await
    }

    /// Patch a draft announcement, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET
                title = COALESCE($2, title),
                body = COALESCE($3, body),
                audience = COALESCE($4, audience),
                updated_at = now()
             WHERE id = $1
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.audience)
            .fetch_optional(pool)
            .await
    }

    /// Publish a draft. Returns `None` when the announcement does not
    /// exist or is already published.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "UPDATE announcements SET published_at = now(), updated_at = now()
             WHERE id = $1 AND published_at IS NULL
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an announcement.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
