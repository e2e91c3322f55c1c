//! ProjectDoc entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A downloadable document belonging to a project. Deleted along with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectDoc {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    /// Path relative to the media root, following the upload convention.
    pub file_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload built by the upload handler once the file is stored.
#[derive(Debug, Clone)]
pub struct CreateProjectDoc {
    pub name: String,
    pub file_path: String,
}

/// DTO for updating document metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectDoc {
    pub name: Option<String>,
}
