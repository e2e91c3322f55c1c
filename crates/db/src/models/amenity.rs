//! Amenity entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A reusable amenity tag (e.g. "Pool"), attachable to any number of projects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Amenity {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub icon_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new amenity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmenity {
    pub title: String,
    pub description: Option<String>,
    pub icon_path: Option<String>,
}

/// DTO for updating an existing amenity. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAmenity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon_path: Option<String>,
}
