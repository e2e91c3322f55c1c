//! Repository for the `projects` table and the `project_amenities` join.

use showcase_core::types::DbId;
use showcase_core::validate::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use sqlx::PgPool;

use crate::models::amenity::Amenity;
use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, category, description, city, state, pin_code, \
     coordinates, start_date, est_completion_date, completed_on, visibility, \
     created_at, updated_at";

/// Default ordering: later (null-safe) completion date first, ties broken by
/// creation time, then title.
const ORDERING: &str = "completed_on DESC NULLS FIRST, created_at DESC, title ASC";

/// Provides CRUD operations for projects and their amenity attachments.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `slug` must already be resolved. Omitted enum fields fall back to the
    /// schema defaults (Residential / Kanpur / Uttar Pradesh / Private).
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                (title, slug, category, description, city, state, pin_code, \
                 coordinates, start_date, est_completion_date, completed_on, visibility)
             VALUES ($1, $2, \
                 COALESCE($3, 'Residential'::project_category), $4, \
                 COALESCE($5, 'Kanpur'::project_city), \
                 COALESCE($6, 'Uttar Pradesh'::project_state), \
                 $7, $8, $9, $10, $11, \
                 COALESCE($12, 'Private'::project_visibility))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(input.category)
            .bind(&input.description)
            .bind(input.city)
            .bind(input.state)
            .bind(&input.pin_code)
            .bind(&input.coordinates)
            .bind(input.start_date)
            .bind(input.est_completion_date)
            .bind(input.completed_on)
            .bind(input.visibility)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List projects in the default showcase ordering, paginated.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query =
            format!("SELECT {COLUMNS} FROM projects ORDER BY {ORDERING} LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                category = COALESCE($4, category),
                description = COALESCE($5, description),
                city = COALESCE($6, city),
                state = COALESCE($7, state),
                pin_code = COALESCE($8, pin_code),
                coordinates = COALESCE($9, coordinates),
                start_date = COALESCE($10, start_date),
                est_completion_date = COALESCE($11, est_completion_date),
                completed_on = COALESCE($12, completed_on),
                visibility = COALESCE($13, visibility)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(input.category)
            .bind(&input.description)
            .bind(input.city)
            .bind(input.state)
            .bind(&input.pin_code)
            .bind(&input.coordinates)
            .bind(input.start_date)
            .bind(input.est_completion_date)
            .bind(input.completed_on)
            .bind(input.visibility)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Images, docs, floor plans, highlights, timelines (and their media),
    /// and join-table rows all cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Amenity attachments (many-to-many)
    // -----------------------------------------------------------------------

    /// List the amenities attached to a project, ordered by title.
    pub async fn list_amenities(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Amenity>, sqlx::Error> {
        sqlx::query_as::<_, Amenity>(
            "SELECT a.id, a.title, a.description, a.icon_path, a.created_at, a.updated_at \
             FROM amenities a \
             JOIN project_amenities pa ON pa.amenity_id = a.id \
             WHERE pa.project_id = $1 \
             ORDER BY a.title",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Replace the set of amenities attached to a project.
    ///
    /// Runs in a transaction so a dangling amenity ID leaves the previous
    /// attachment set untouched.
    pub async fn set_amenities(
        pool: &PgPool,
        project_id: DbId,
        amenity_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM project_amenities WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        for amenity_id in amenity_ids {
            sqlx::query(
                "INSERT INTO project_amenities (project_id, amenity_id) \
                 VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(project_id)
            .bind(amenity_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}
