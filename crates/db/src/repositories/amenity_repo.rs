//! Repository for the `amenities` table.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, icon_path, created_at, updated_at";

/// Provides CRUD operations for amenities.
pub struct AmenityRepo;

impl AmenityRepo {
    /// Insert a new amenity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAmenity) -> Result<Amenity, sqlx::Error> {
        let query = format!(
            "INSERT INTO amenities (title, description, icon_path) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon_path)
            .fetch_one(pool)
            .await
    }

    /// Find an amenity by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM amenities WHERE id = $1");
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all amenities, ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Amenity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM amenities ORDER BY title");
        sqlx::query_as::<_, Amenity>(&query).fetch_all(pool).await
    }

    /// Update an amenity. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAmenity,
    ) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!(
            "UPDATE amenities SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                icon_path = COALESCE($4, icon_path)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete an amenity by ID. Returns `true` if a row was removed.
    /// Project attachments go with it (`ON DELETE CASCADE` on the join table).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM amenities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
