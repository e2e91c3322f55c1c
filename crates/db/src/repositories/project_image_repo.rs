//! Repository for the `project_images` table.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_image::{CreateProjectImage, ProjectImage, UpdateProjectImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, file_path, caption, created_at, updated_at";

/// Provides CRUD operations for project gallery images.
pub struct ProjectImageRepo;

impl ProjectImageRepo {
    /// Insert a new image row for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectImage,
    ) -> Result<ProjectImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_images (project_id, file_path, caption) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .bind(&input.file_path)
            .bind(&input.caption)
            .fetch_one(pool)
            .await
    }

    /// Find an image by ID, scoped to its owning project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_images WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's images, most recently created first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_images WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update image metadata. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateProjectImage,
    ) -> Result<Option<ProjectImage>, sqlx::Error> {
        let query = format!(
            "UPDATE project_images SET caption = COALESCE($3, caption) \
             WHERE id = $1 AND project_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.caption)
            .fetch_optional(pool)
            .await
    }

    /// Delete an image by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_images WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the images belonging to a project.
    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM project_images WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }
}
