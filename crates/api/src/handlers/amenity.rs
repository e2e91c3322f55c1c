//! Handlers for the `/amenities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::validate::{validate_length, validate_opt_length};
use showcase_db::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};
use showcase_db::repositories::AmenityRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/amenities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAmenity>,
) -> AppResult<(StatusCode, Json<Amenity>)> {
    validate_length("title", &input.title, 100)?;
    validate_opt_length("description", input.description.as_deref(), 200)?;
    let amenity = AmenityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(amenity)))
}

/// GET /api/v1/amenities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Amenity>>> {
    let amenities = AmenityRepo::list(&state.pool).await?;
    Ok(Json(amenities))
}

/// GET /api/v1/amenities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Amenity>> {
    let amenity = AmenityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    Ok(Json(amenity))
}

/// PUT /api/v1/amenities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAmenity>,
) -> AppResult<Json<Amenity>> {
    if let Some(title) = input.title.as_deref() {
        validate_length("title", title, 100)?;
    }
    validate_opt_length("description", input.description.as_deref(), 200)?;
    let amenity = AmenityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))?;
    Ok(Json(amenity))
}

/// DELETE /api/v1/amenities/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AmenityRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Amenity",
            id,
        }))
    }
}
