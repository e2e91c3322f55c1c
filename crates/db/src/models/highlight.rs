//! ProjectHighlight entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A marketing highlight bullet belonging to a project. Deleted along with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectHighlight {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new highlight.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectHighlight {
    pub title: String,
    pub description: Option<String>,
}

/// DTO for updating an existing highlight. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectHighlight {
    pub title: Option<String>,
    pub description: Option<String>,
}
