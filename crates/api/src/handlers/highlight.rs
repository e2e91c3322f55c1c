//! Handlers for the `/projects/{project_id}/highlights` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::validate::{validate_length, validate_opt_length};
use showcase_db::models::highlight::{
    CreateProjectHighlight, ProjectHighlight, UpdateProjectHighlight,
};
use showcase_db::repositories::ProjectHighlightRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project_exists;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/highlights
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectHighlight>,
) -> AppResult<(StatusCode, Json<ProjectHighlight>)> {
    ensure_project_exists(&state, project_id).await?;
    validate_length("title", &input.title, 100)?;
    validate_opt_length("description", input.description.as_deref(), 200)?;
    let highlight = ProjectHighlightRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(highlight)))
}

/// GET /api/v1/projects/{project_id}/highlights
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectHighlight>>> {
    ensure_project_exists(&state, project_id).await?;
    let highlights = ProjectHighlightRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(highlights))
}

/// GET /api/v1/projects/{project_id}/highlights/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectHighlight>> {
    let highlight = ProjectHighlightRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectHighlight",
            id,
        }))?;
    Ok(Json(highlight))
}

/// PUT /api/v1/projects/{project_id}/highlights/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjectHighlight>,
) -> AppResult<Json<ProjectHighlight>> {
    if let Some(title) = input.title.as_deref() {
        validate_length("title", title, 100)?;
    }
    validate_opt_length("description", input.description.as_deref(), 200)?;
    let highlight = ProjectHighlightRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectHighlight",
            id,
        }))?;
    Ok(Json(highlight))
}

/// DELETE /api/v1/projects/{project_id}/highlights/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ProjectHighlightRepo::delete(&state.pool, project_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectHighlight",
            id,
        }))
    }
}
