//! Repositories for the `project_timelines` and `project_timeline_media` tables.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::timeline::{
    CreateProjectTimeline, CreateProjectTimelineMedia, ProjectTimeline, ProjectTimelineMedia,
    UpdateProjectTimeline, UpdateProjectTimelineMedia,
};

/// Column list for `project_timelines` queries.
const TIMELINE_COLUMNS: &str =
    "id, project_id, title, description, completed_on, created_at, updated_at";

/// Column list for `project_timeline_media` queries.
const MEDIA_COLUMNS: &str =
    "id, timeline_id, title, description, file_path, media_type, created_at, updated_at";

/// Provides CRUD operations for construction milestones.
pub struct ProjectTimelineRepo;

impl ProjectTimelineRepo {
    /// Insert a new milestone for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectTimeline,
    ) -> Result<ProjectTimeline, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_timelines (project_id, title, description, completed_on) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {TIMELINE_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectTimeline>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.completed_on)
            .fetch_one(pool)
            .await
    }

    /// Find a milestone by ID, scoped to its owning project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<ProjectTimeline>, sqlx::Error> {
        let query = format!(
            "SELECT {TIMELINE_COLUMNS} FROM project_timelines WHERE id = $1 AND project_id = $2"
        );
        sqlx::query_as::<_, ProjectTimeline>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's milestones, most recent completion first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectTimeline>, sqlx::Error> {
        let query = format!(
            "SELECT {TIMELINE_COLUMNS} FROM project_timelines \
             WHERE project_id = $1 \
             ORDER BY completed_on DESC"
        );
        sqlx::query_as::<_, ProjectTimeline>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a milestone. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateProjectTimeline,
    ) -> Result<Option<ProjectTimeline>, sqlx::Error> {
        let query = format!(
            "UPDATE project_timelines SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                completed_on = COALESCE($5, completed_on)
             WHERE id = $1 AND project_id = $2
             RETURNING {TIMELINE_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectTimeline>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.completed_on)
            .fetch_optional(pool)
            .await
    }

    /// Delete a milestone by ID. Returns `true` if a row was removed.
    /// Attached media cascade.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_timelines WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the milestones belonging to a project.
    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM project_timelines WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }
}

/// Provides CRUD operations for milestone media attachments.
pub struct ProjectTimelineMediaRepo;

impl ProjectTimelineMediaRepo {
    /// Insert a new media row for a milestone, returning the created row.
    pub async fn create(
        pool: &PgPool,
        timeline_id: DbId,
        input: &CreateProjectTimelineMedia,
    ) -> Result<ProjectTimelineMedia, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_timeline_media \
                (timeline_id, title, description, file_path, media_type) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 'IMAGE'::timeline_media_type)) \
             RETURNING {MEDIA_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectTimelineMedia>(&query)
            .bind(timeline_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.file_path)
            .bind(input.media_type)
            .fetch_one(pool)
            .await
    }

    /// Find a media row by ID, scoped to its owning milestone.
    pub async fn find_by_id(
        pool: &PgPool,
        timeline_id: DbId,
        id: DbId,
    ) -> Result<Option<ProjectTimelineMedia>, sqlx::Error> {
        let query = format!(
            "SELECT {MEDIA_COLUMNS} FROM project_timeline_media \
             WHERE id = $1 AND timeline_id = $2"
        );
        sqlx::query_as::<_, ProjectTimelineMedia>(&query)
            .bind(id)
            .bind(timeline_id)
            .fetch_optional(pool)
            .await
    }

    /// List a milestone's media, most recently created first.
    pub async fn list_by_timeline(
        pool: &PgPool,
        timeline_id: DbId,
    ) -> Result<Vec<ProjectTimelineMedia>, sqlx::Error> {
        let query = format!(
            "SELECT {MEDIA_COLUMNS} FROM project_timeline_media \
             WHERE timeline_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ProjectTimelineMedia>(&query)
            .bind(timeline_id)
            .fetch_all(pool)
            .await
    }

    /// Update media metadata. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        timeline_id: DbId,
        id: DbId,
        input: &UpdateProjectTimelineMedia,
    ) -> Result<Option<ProjectTimelineMedia>, sqlx::Error> {
        let query = format!(
            "UPDATE project_timeline_media SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                media_type = COALESCE($5, media_type)
             WHERE id = $1 AND timeline_id = $2
             RETURNING {MEDIA_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectTimelineMedia>(&query)
            .bind(id)
            .bind(timeline_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.media_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, timeline_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_timeline_media WHERE id = $1 AND timeline_id = $2")
                .bind(id)
                .bind(timeline_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the media rows belonging to a milestone.
    pub async fn count_by_timeline(pool: &PgPool, timeline_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM project_timeline_media WHERE timeline_id = $1")
            .bind(timeline_id)
            .fetch_one(pool)
            .await
    }
}
