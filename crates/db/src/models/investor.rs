//! Investor entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An investor/backer profile, attachable to any number of projects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Investor {
    pub id: DbId,
    pub name: String,
    pub profile_image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new investor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvestor {
    pub name: String,
    pub profile_image: String,
}

/// DTO for updating an existing investor. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvestor {
    pub name: Option<String>,
    pub profile_image: Option<String>,
}

/// DTO replacing the set of projects an investor backs.
#[derive(Debug, Clone, Deserialize)]
pub struct SetInvestorProjects {
    pub project_ids: Vec<DbId>,
}
