//! Repository for the `roles` table.

use hrx_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

/// Column list for roles queries.
const ROLE_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides read operations for the seeded role catalog.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {ROLE_COLUMNS} FROM roles ORDER BY id ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Find a role by its name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {ROLE_COLUMNS} FROM roles WHERE name = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a role id to its name. Errors with `RowNotFound` for an
    /// unknown id.
    pub async fn resolve_name(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        let row: (String,) = sqlx::query_as("SELECT name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
