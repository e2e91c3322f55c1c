//! Handlers for the `/enquiries` resource.
//!
//! Enquiries originate from the public contact form, so this resource has a
//! restricted permission set: view, change, and delete only. There is no
//! create handler and no POST route.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::validate::{validate_email, validate_length};
use showcase_db::models::enquiry::{Enquiry, UpdateEnquiry};
use showcase_db::repositories::EnquiryRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/enquiries
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Enquiry>>> {
    let enquiries = EnquiryRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(enquiries))
}

/// GET /api/v1/enquiries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Enquiry>> {
    let enquiry = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enquiry",
            id,
        }))?;
    Ok(Json(enquiry))
}

/// PUT /api/v1/enquiries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEnquiry>,
) -> AppResult<Json<Enquiry>> {
    if let Some(name) = input.name.as_deref() {
        validate_length("name", name, 100)?;
    }
    if let Some(email) = input.email.as_deref() {
        validate_email(email)?;
    }
    if let Some(phone) = input.phone.as_deref() {
        validate_length("phone", phone, 50)?;
    }
    let enquiry = EnquiryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enquiry",
            id,
        }))?;
    Ok(Json(enquiry))
}

/// DELETE /api/v1/enquiries/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EnquiryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Enquiry",
            id,
        }))
    }
}
