//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::validate::validate_length;
use showcase_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use showcase_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/testimonials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    validate_length("user_name", &input.user_name, 100)?;
    validate_length("user_detail", &input.user_detail, 120)?;
    validate_length("message", &input.message, 10_000)?;
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// GET /api/v1/testimonials
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(testimonials))
}

/// GET /api/v1/testimonials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(testimonial))
}

/// PUT /api/v1/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    if let Some(user_name) = input.user_name.as_deref() {
        validate_length("user_name", user_name, 100)?;
    }
    if let Some(user_detail) = input.user_detail.as_deref() {
        validate_length("user_detail", user_detail, 120)?;
    }
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(testimonial))
}

/// DELETE /api/v1/testimonials/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TestimonialRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))
    }
}
