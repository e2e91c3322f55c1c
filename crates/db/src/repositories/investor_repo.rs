//! Repository for the `investors` table and the `project_investors` join.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::investor::{CreateInvestor, Investor, UpdateInvestor};
use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, profile_image, created_at, updated_at";

/// Provides CRUD operations for investors and their project attachments.
pub struct InvestorRepo;

impl InvestorRepo {
    /// Insert a new investor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInvestor) -> Result<Investor, sqlx::Error> {
        let query = format!(
            "INSERT INTO investors (name, profile_image) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Investor>(&query)
            .bind(&input.name)
            .bind(&input.profile_image)
            .fetch_one(pool)
            .await
    }

    /// Find an investor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Investor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM investors WHERE id = $1");
        sqlx::query_as::<_, Investor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all investors, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Investor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM investors ORDER BY name");
        sqlx::query_as::<_, Investor>(&query).fetch_all(pool).await
    }

    /// Update an investor. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvestor,
    ) -> Result<Option<Investor>, sqlx::Error> {
        let query = format!(
            "UPDATE investors SET
                name = COALESCE($2, name),
                profile_image = COALESCE($3, profile_image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Investor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.profile_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an investor by ID. Returns `true` if a row was removed.
    /// Project attachments go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM investors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Project attachments (many-to-many)
    // -----------------------------------------------------------------------

    /// List the projects an investor backs, in the projects' default ordering.
    pub async fn list_projects(
        pool: &PgPool,
        investor_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            "SELECT p.id, p.title, p.slug, p.category, p.description, p.city, p.state, \
                    p.pin_code, p.coordinates, p.start_date, p.est_completion_date, \
                    p.completed_on, p.visibility, p.created_at, p.updated_at \
             FROM projects p \
             JOIN project_investors pi ON pi.project_id = p.id \
             WHERE pi.investor_id = $1 \
             ORDER BY p.completed_on DESC NULLS FIRST, p.created_at DESC, p.title ASC",
        )
        .bind(investor_id)
        .fetch_all(pool)
        .await
    }

    /// Replace the set of projects an investor backs.
    ///
    /// Runs in a transaction so a dangling project ID leaves the previous
    /// attachment set untouched.
    pub async fn set_projects(
        pool: &PgPool,
        investor_id: DbId,
        project_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM project_investors WHERE investor_id = $1")
            .bind(investor_id)
            .execute(&mut *tx)
            .await?;

        for project_id in project_ids {
            sqlx::query(
                "INSERT INTO project_investors (project_id, investor_id) \
                 VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(project_id)
            .bind(investor_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}
