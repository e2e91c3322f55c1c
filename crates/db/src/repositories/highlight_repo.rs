//! Repository for the `project_highlights` table.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::highlight::{
    CreateProjectHighlight, ProjectHighlight, UpdateProjectHighlight,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, created_at, updated_at";

/// Provides CRUD operations for project highlights.
pub struct ProjectHighlightRepo;

impl ProjectHighlightRepo {
    /// Insert a new highlight for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectHighlight,
    ) -> Result<ProjectHighlight, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_highlights (project_id, title, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectHighlight>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a highlight by ID, scoped to its owning project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ProjectHighlight>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_highlights WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, ProjectHighlight>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's highlights, most recently created first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectHighlight>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_highlights WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ProjectHighlight>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a highlight. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateProjectHighlight,
    ) -> Result<Option<ProjectHighlight>, sqlx::Error> {
        let query = format!(
            "UPDATE project_highlights SET
                title = COALESCE($3, title),
                description = COALESCE($4, description)
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectHighlight>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a highlight by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_highlights WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the highlights belonging to a project.
    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM project_highlights WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }
}
