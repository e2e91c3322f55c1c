//! ProjectTimeline and ProjectTimelineMedia models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Media kind for a timeline attachment, mapped to `timeline_media_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "timeline_media_type")]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum TimelineMediaType {
    Image,
    Pdf,
    Csv,
}

/// A construction milestone belonging to a project. Deleted along with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectTimeline {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub completed_on: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new timeline milestone.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectTimeline {
    pub title: String,
    pub description: String,
    pub completed_on: NaiveDate,
}

/// DTO for updating an existing milestone. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectTimeline {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed_on: Option<NaiveDate>,
}

/// Media attached to a milestone. Deleted along with the milestone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectTimelineMedia {
    pub id: DbId,
    pub timeline_id: DbId,
    pub title: String,
    pub description: String,
    /// Path relative to the media root; nullable so a row can outlive a
    /// pruned file.
    pub file_path: Option<String>,
    pub media_type: TimelineMediaType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload built by the upload handler once the file is stored.
#[derive(Debug, Clone)]
pub struct CreateProjectTimelineMedia {
    pub title: String,
    pub description: String,
    pub file_path: Option<String>,
    pub media_type: Option<TimelineMediaType>,
}

/// DTO for updating timeline media metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectTimelineMedia {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<TimelineMediaType>,
}
