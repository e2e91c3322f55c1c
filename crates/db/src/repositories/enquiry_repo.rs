//! Repository for the `enquiries` table.
//!
//! `create` exists for the public contact-form producer and for tests; the
//! admin HTTP surface deliberately exposes no create route for enquiries.

use showcase_core::types::DbId;
use showcase_core::validate::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use sqlx::PgPool;

use crate::models::enquiry::{CreateEnquiry, Enquiry, UpdateEnquiry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, message, created_at, updated_at";

/// Provides view/change/delete operations for enquiries, plus the
/// public-form insert.
pub struct EnquiryRepo;

impl EnquiryRepo {
    /// Insert a new enquiry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries (name, email, phone, message) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find an enquiry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries WHERE id = $1");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List enquiries, most recently created first, paginated.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Enquiry>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query =
            format!("SELECT {COLUMNS} FROM enquiries ORDER BY created_at DESC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update an enquiry. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEnquiry,
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE enquiries SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                message = COALESCE($5, message)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .fetch_optional(pool)
            .await
    }

    /// Delete an enquiry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
