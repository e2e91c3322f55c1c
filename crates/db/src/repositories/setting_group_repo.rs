//! Repository for the `setting_groups` table.

use showcase_core::types::DbId;
use showcase_core::validate::{clamp_limit, DEFAULT_SUGGEST_LIMIT, MAX_SUGGEST_LIMIT};
use sqlx::PgPool;

use crate::models::setting_group::{SettingGroup, SettingGroupSuggestion, UpdateSettingGroup};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, created_at, updated_at";

/// Provides CRUD operations for setting groups.
pub struct SettingGroupRepo;

impl SettingGroupRepo {
    /// Insert a new setting group, returning the created row.
    ///
    /// `slug` must already be resolved (derived from the title when the
    /// client omitted it); uniqueness is enforced by `uq_setting_groups_slug`.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        slug: &str,
    ) -> Result<SettingGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO setting_groups (title, slug) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SettingGroup>(&query)
            .bind(title)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Find a setting group by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SettingGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM setting_groups WHERE id = $1");
        sqlx::query_as::<_, SettingGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a setting group by its slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<SettingGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM setting_groups WHERE slug = $1");
        sqlx::query_as::<_, SettingGroup>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all setting groups, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<SettingGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM setting_groups ORDER BY created_at DESC");
        sqlx::query_as::<_, SettingGroup>(&query)
            .fetch_all(pool)
            .await
    }

    /// Autocomplete suggestions for the admin lookup widget: prefix match on
    /// title, ordered alphabetically.
    pub async fn suggest(
        pool: &PgPool,
        prefix: &str,
        limit: Option<i64>,
    ) -> Result<Vec<SettingGroupSuggestion>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_SUGGEST_LIMIT, MAX_SUGGEST_LIMIT);
        sqlx::query_as::<_, SettingGroupSuggestion>(
            "SELECT id, title, slug FROM setting_groups \
             WHERE title ILIKE $1 || '%' \
             ORDER BY title \
             LIMIT $2",
        )
        .bind(prefix)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Update a setting group. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. A slug change
    /// cascades to referencing settings (`ON UPDATE CASCADE`).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSettingGroup,
    ) -> Result<Option<SettingGroup>, sqlx::Error> {
        let query = format!(
            "UPDATE setting_groups SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SettingGroup>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a setting group by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while a setting still references
    /// the group (`ON DELETE RESTRICT`); the API maps that to 409.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM setting_groups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
