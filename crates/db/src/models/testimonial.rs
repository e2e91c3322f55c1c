//! Testimonial entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A user-submitted quote for marketing display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub message: String,
    pub user_name: String,
    pub user_detail: String,
    pub submitted_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub message: String,
    pub user_name: String,
    pub user_detail: String,
}

/// DTO for updating an existing testimonial. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTestimonial {
    pub message: Option<String>,
    pub user_name: Option<String>,
    pub user_detail: Option<String>,
}
