//! SettingGroup entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A named, slugged bucket for site settings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SettingGroup {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new setting group.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSettingGroup {
    pub title: String,
    /// Derived from `title` when omitted.
    pub slug: Option<String>,
}

/// DTO for updating an existing setting group. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingGroup {
    pub title: Option<String>,
    pub slug: Option<String>,
}

/// Trimmed row for the admin autocomplete widget.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SettingGroupSuggestion {
    pub id: DbId,
    pub title: String,
    pub slug: String,
}
