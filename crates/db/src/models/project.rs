//! Project entity model, enumerated choices, and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Development category, mapped to the `project_category` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_category")]
pub enum ProjectCategory {
    Residential,
    Commercial,
    Retail,
}

/// City the development is located in, mapped to `project_city`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_city")]
pub enum ProjectCity {
    Kanpur,
    Lucknow,
    Ayodhya,
    Vrindavan,
}

/// State the development is located in, mapped to `project_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_state")]
pub enum ProjectState {
    #[sqlx(rename = "Uttar Pradesh")]
    #[serde(rename = "Uttar Pradesh")]
    UttarPradesh,
    Delhi,
    Uttarakhand,
}

/// Listing visibility, mapped to `project_visibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_visibility")]
pub enum ProjectVisibility {
    Public,
    Private,
}

/// A real-estate development.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub category: ProjectCategory,
    pub description: Option<String>,
    pub city: ProjectCity,
    pub state: ProjectState,
    pub pin_code: String,
    pub coordinates: String,
    pub start_date: NaiveDate,
    pub est_completion_date: Option<NaiveDate>,
    pub completed_on: Option<NaiveDate>,
    pub visibility: ProjectVisibility,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    /// Derived from `title` when omitted.
    pub slug: Option<String>,
    /// Defaults to Residential.
    pub category: Option<ProjectCategory>,
    pub description: Option<String>,
    /// Defaults to Kanpur.
    pub city: Option<ProjectCity>,
    /// Defaults to Uttar Pradesh.
    pub state: Option<ProjectState>,
    pub pin_code: String,
    pub coordinates: String,
    pub start_date: NaiveDate,
    pub est_completion_date: Option<NaiveDate>,
    pub completed_on: Option<NaiveDate>,
    /// Defaults to Private.
    pub visibility: Option<ProjectVisibility>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<ProjectCategory>,
    pub description: Option<String>,
    pub city: Option<ProjectCity>,
    pub state: Option<ProjectState>,
    pub pin_code: Option<String>,
    pub coordinates: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub est_completion_date: Option<NaiveDate>,
    pub completed_on: Option<NaiveDate>,
    pub visibility: Option<ProjectVisibility>,
}

/// DTO replacing the set of amenities attached to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct SetProjectAmenities {
    pub amenity_ids: Vec<DbId>,
}
