//! Enquiry entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An inbound contact-form submission.
///
/// Rows are inserted by the public-facing site form; the admin surface can
/// view, change, and delete enquiries but exposes no create route.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an enquiry. Used by the public-form producer and by
/// tests; deliberately not wired to any admin route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// DTO for updating an existing enquiry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEnquiry {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}
