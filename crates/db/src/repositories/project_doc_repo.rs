//! Repository for the `project_docs` table.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_doc::{CreateProjectDoc, ProjectDoc, UpdateProjectDoc};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, file_path, created_at, updated_at";

/// Provides CRUD operations for project documents.
pub struct ProjectDocRepo;

impl ProjectDocRepo {
    /// Insert a new document row for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectDoc,
    ) -> Result<ProjectDoc, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_docs (project_id, name, file_path) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectDoc>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    /// Find a document by ID, scoped to its owning project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ProjectDoc>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_docs WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, ProjectDoc>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's documents, most recently created first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectDoc>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_docs WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ProjectDoc>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update document metadata. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateProjectDoc,
    ) -> Result<Option<ProjectDoc>, sqlx::Error> {
        let query = format!(
            "UPDATE project_docs SET name = COALESCE($3, name) \
             WHERE id = $1 AND project_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectDoc>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a document by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_docs WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the documents belonging to a project.
    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM project_docs WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }
}
