//! Handlers for the `/projects` resource and its amenity attachments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::slug::{is_valid_slug, resolve_slug};
use showcase_core::types::DbId;
use showcase_core::uploads::project_media_dir;
use showcase_core::validate::validate_length;
use showcase_db::models::amenity::Amenity;
use showcase_db::models::project::{
    CreateProject, Project, SetProjectAmenities, UpdateProject,
};
use showcase_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// 404 unless the project exists. Shared by the nested child resources.
pub(crate) async fn ensure_project_exists(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}

fn validate_fields(
    title: Option<&str>,
    pin_code: Option<&str>,
    coordinates: Option<&str>,
) -> AppResult<()> {
    if let Some(title) = title {
        validate_length("title", title, 100)?;
    }
    if let Some(pin_code) = pin_code {
        validate_length("pin_code", pin_code, 30)?;
    }
    if let Some(coordinates) = coordinates {
        validate_length("coordinates", coordinates, 50)?;
    }
    Ok(())
}

/// POST /api/v1/projects
///
/// The slug is prepopulated from the title when omitted.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_fields(
        Some(&input.title),
        Some(&input.pin_code),
        Some(&input.coordinates),
    )?;
    let slug = resolve_slug(&input.title, input.slug.as_deref())?;
    let project = ProjectRepo::create(&state.pool, &slug, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// Ordered with later (null-safe) completion dates first, ties broken by
/// creation time, then title.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    validate_fields(
        input.title.as_deref(),
        input.pin_code.as_deref(),
        input.coordinates.as_deref(),
    )?;
    if let Some(slug) = input.slug.as_deref() {
        if !is_valid_slug(slug) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid slug '{slug}'"
            ))));
        }
    }
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Cascades to images, docs, floor plans, highlights, timelines (and their
/// media), and join-table rows. The database handles the rows; the project's
/// media subtree is pruned here since every child file lives under it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        state.media.remove_dir(&project_media_dir(id)).await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// GET /api/v1/projects/{project_id}/amenities
pub async fn list_amenities(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Amenity>>> {
    ensure_project_exists(&state, project_id).await?;
    let amenities = ProjectRepo::list_amenities(&state.pool, project_id).await?;
    Ok(Json(amenities))
}

/// PUT /api/v1/projects/{project_id}/amenities
///
/// Replaces the attachment set; returns the resulting amenity list.
pub async fn set_amenities(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<SetProjectAmenities>,
) -> AppResult<Json<Vec<Amenity>>> {
    ensure_project_exists(&state, project_id).await?;
    ProjectRepo::set_amenities(&state.pool, project_id, &input.amenity_ids).await?;
    let amenities = ProjectRepo::list_amenities(&state.pool, project_id).await?;
    Ok(Json(amenities))
}
