//! Setting entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A single key/value configuration entry.
///
/// Each setting belongs to exactly one setting group, referenced by the
/// group's slug. The group cannot be deleted while a setting references it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub id: DbId,
    pub name: String,
    pub value: String,
    pub group_slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new setting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSetting {
    pub name: String,
    pub value: String,
    pub group_slug: String,
}

/// DTO for updating an existing setting. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSetting {
    pub name: Option<String>,
    pub value: Option<String>,
    pub group_slug: Option<String>,
}
