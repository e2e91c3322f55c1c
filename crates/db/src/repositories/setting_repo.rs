//! Repository for the `settings` table.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::setting::{CreateSetting, Setting, UpdateSetting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, value, group_slug, created_at, updated_at";

/// Provides CRUD operations for settings.
pub struct SettingRepo;

impl SettingRepo {
    /// Insert a new setting, returning the created row.
    ///
    /// The one-setting-per-group rule is enforced by `uq_settings_group_slug`;
    /// a dangling `group_slug` fails the foreign key.
    pub async fn create(pool: &PgPool, input: &CreateSetting) -> Result<Setting, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (name, value, group_slug) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(&input.name)
            .bind(&input.value)
            .bind(&input.group_slug)
            .fetch_one(pool)
            .await
    }

    /// Find a setting by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the setting referencing a group slug, if any.
    pub async fn find_by_group_slug(
        pool: &PgPool,
        group_slug: &str,
    ) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE group_slug = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(group_slug)
            .fetch_optional(pool)
            .await
    }

    /// List all settings, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY created_at DESC");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    /// Update a setting. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSetting,
    ) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET
                name = COALESCE($2, name),
                value = COALESCE($3, value),
                group_slug = COALESCE($4, group_slug)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.value)
            .bind(&input.group_slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a setting by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM settings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
