//! ProjectFloorPlan entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A floor plan belonging to a project. Deleted along with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFloorPlan {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    /// Path relative to the media root, following the upload convention.
    pub file_path: String,
    /// Covered area in square feet.
    pub area: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload built by the upload handler once the file is stored.
#[derive(Debug, Clone)]
pub struct CreateProjectFloorPlan {
    pub title: String,
    pub file_path: String,
    pub area: f64,
}

/// DTO for updating floor plan metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectFloorPlan {
    pub title: Option<String>,
    pub area: Option<f64>,
}
