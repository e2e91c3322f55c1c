//! Repository for the `project_floor_plans` table.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::floor_plan::{
    CreateProjectFloorPlan, ProjectFloorPlan, UpdateProjectFloorPlan,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, file_path, area, created_at, updated_at";

/// Provides CRUD operations for project floor plans.
pub struct ProjectFloorPlanRepo;

impl ProjectFloorPlanRepo {
    /// Insert a new floor plan row for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectFloorPlan,
    ) -> Result<ProjectFloorPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_floor_plans (project_id, title, file_path, area) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFloorPlan>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.file_path)
            .bind(input.area)
            .fetch_one(pool)
            .await
    }

    /// Find a floor plan by ID, scoped to its owning project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ProjectFloorPlan>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_floor_plans WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, ProjectFloorPlan>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's floor plans, ordered by title.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectFloorPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_floor_plans WHERE project_id = $1 ORDER BY title"
        );
        sqlx::query_as::<_, ProjectFloorPlan>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update floor plan metadata. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateProjectFloorPlan,
    ) -> Result<Option<ProjectFloorPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE project_floor_plans SET
                title = COALESCE($3, title),
                area = COALESCE($4, area)
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFloorPlan>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.title)
            .bind(input.area)
            .fetch_optional(pool)
            .await
    }

    /// Delete a floor plan by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_floor_plans WHERE id = $1 AND project_id = $2")
                .bind(id)
                .bind(project_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the floor plans belonging to a project.
    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM project_floor_plans WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }
}
