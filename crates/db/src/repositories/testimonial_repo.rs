//! Repository for the `testimonials` table.

use showcase_core::types::DbId;
use showcase_core::validate::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, message, user_name, user_detail, submitted_at, created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial, returning the created row. `submitted_at`
    /// is stamped by the database.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (message, user_name, user_detail) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.message)
            .bind(&input.user_name)
            .bind(&input.user_detail)
            .fetch_one(pool)
            .await
    }

    /// Find a testimonial by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List testimonials, most recently created first, paginated.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a testimonial. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                message = COALESCE($2, message),
                user_name = COALESCE($3, user_name),
                user_detail = COALESCE($4, user_detail)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.message)
            .bind(&input.user_name)
            .bind(&input.user_detail)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
