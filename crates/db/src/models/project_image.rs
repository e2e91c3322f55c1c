//! ProjectImage entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A gallery image belonging to a project. Deleted along with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImage {
    pub id: DbId,
    pub project_id: DbId,
    /// Path relative to the media root, following the upload convention.
    pub file_path: String,
    pub caption: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload built by the upload handler once the file is stored.
#[derive(Debug, Clone)]
pub struct CreateProjectImage {
    pub file_path: String,
    pub caption: Option<String>,
}

/// DTO for updating image metadata. The file itself is immutable; replacing
/// it means delete and re-upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectImage {
    pub caption: Option<String>,
}
