//! Handlers for construction milestones and their media attachments.
//!
//! Timeline media is the one upload resource where the file is optional: a
//! milestone entry can carry title and description alone, with the file
//! attached later via re-upload.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::uploads::timeline_media_path;
use showcase_core::validate::validate_length;
use showcase_db::models::timeline::{
    CreateProjectTimeline, CreateProjectTimelineMedia, ProjectTimeline, ProjectTimelineMedia,
    TimelineMediaType, UpdateProjectTimeline, UpdateProjectTimelineMedia,
};
use showcase_db::repositories::{ProjectTimelineMediaRepo, ProjectTimelineRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project_exists;
use crate::handlers::project_media::read_upload_form;
use crate::state::AppState;

/// 404 unless the milestone exists under the given project.
async fn ensure_timeline_exists(
    state: &AppState,
    project_id: DbId,
    timeline_id: DbId,
) -> AppResult<()> {
    ProjectTimelineRepo::find_by_id(&state.pool, project_id, timeline_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectTimeline",
            id: timeline_id,
        }))?;
    Ok(())
}

fn parse_media_type(raw: &str) -> AppResult<TimelineMediaType> {
    match raw {
        "IMAGE" => Ok(TimelineMediaType::Image),
        "PDF" => Ok(TimelineMediaType::Pdf),
        "CSV" => Ok(TimelineMediaType::Csv),
        other => Err(AppError::BadRequest(format!(
            "Unknown media_type '{other}', expected IMAGE, PDF or CSV"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Milestones
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{project_id}/timelines
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectTimeline>,
) -> AppResult<(StatusCode, Json<ProjectTimeline>)> {
    ensure_project_exists(&state, project_id).await?;
    validate_length("title", &input.title, 100)?;
    validate_length("description", &input.description, 200)?;
    let timeline = ProjectTimelineRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(timeline)))
}

/// GET /api/v1/projects/{project_id}/timelines
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectTimeline>>> {
    ensure_project_exists(&state, project_id).await?;
    let timelines = ProjectTimelineRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(timelines))
}

/// GET /api/v1/projects/{project_id}/timelines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectTimeline>> {
    let timeline = ProjectTimelineRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectTimeline",
            id,
        }))?;
    Ok(Json(timeline))
}

/// PUT /api/v1/projects/{project_id}/timelines/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjectTimeline>,
) -> AppResult<Json<ProjectTimeline>> {
    if let Some(title) = input.title.as_deref() {
        validate_length("title", title, 100)?;
    }
    if let Some(description) = input.description.as_deref() {
        validate_length("description", description, 200)?;
    }
    let timeline = ProjectTimelineRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectTimeline",
            id,
        }))?;
    Ok(Json(timeline))
}

/// DELETE /api/v1/projects/{project_id}/timelines/{id}
///
/// Attached media rows cascade; their files are pruned here since the
/// database cannot do it.
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_timeline_exists(&state, project_id, id).await?;
    let media = ProjectTimelineMediaRepo::list_by_timeline(&state.pool, id).await?;
    ProjectTimelineRepo::delete(&state.pool, project_id, id).await?;
    for item in media {
        if let Some(path) = item.file_path.as_deref() {
            state.media.remove(path).await;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Milestone media
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{project_id}/timelines/{timeline_id}/media
/// (multipart: title, description, media_type?, file?)
pub async fn upload_media(
    State(state): State<AppState>,
    Path((project_id, timeline_id)): Path<(DbId, DbId)>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProjectTimelineMedia>)> {
    ensure_timeline_exists(&state, project_id, timeline_id).await?;

    let mut form = read_upload_form(multipart).await?;
    let title = form
        .fields
        .remove("title")
        .ok_or_else(|| AppError::BadRequest("Missing 'title' field".to_string()))?;
    validate_length("title", &title, 120)?;
    let description = form
        .fields
        .remove("description")
        .ok_or_else(|| AppError::BadRequest("Missing 'description' field".to_string()))?;
    validate_length("description", &description, 200)?;
    let media_type = form
        .fields
        .remove("media_type")
        .map(|raw| parse_media_type(&raw))
        .transpose()?;

    let file_path = match form.file {
        Some((filename, bytes)) => {
            let path = state
                .media
                .save_unique(&timeline_media_path(project_id, timeline_id, &filename), &bytes)
                .await?;
            Some(path)
        }
        None => None,
    };

    let media = ProjectTimelineMediaRepo::create(
        &state.pool,
        timeline_id,
        &CreateProjectTimelineMedia {
            title,
            description,
            file_path,
            media_type,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(media)))
}

/// GET /api/v1/projects/{project_id}/timelines/{timeline_id}/media
pub async fn list_media(
    State(state): State<AppState>,
    Path((project_id, timeline_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Vec<ProjectTimelineMedia>>> {
    ensure_timeline_exists(&state, project_id, timeline_id).await?;
    let media = ProjectTimelineMediaRepo::list_by_timeline(&state.pool, timeline_id).await?;
    Ok(Json(media))
}

/// GET /api/v1/projects/{project_id}/timelines/{timeline_id}/media/{id}
pub async fn get_media(
    State(state): State<AppState>,
    Path((project_id, timeline_id, id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<Json<ProjectTimelineMedia>> {
    ensure_timeline_exists(&state, project_id, timeline_id).await?;
    let media = ProjectTimelineMediaRepo::find_by_id(&state.pool, timeline_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectTimelineMedia",
            id,
        }))?;
    Ok(Json(media))
}

/// PUT /api/v1/projects/{project_id}/timelines/{timeline_id}/media/{id}
pub async fn update_media(
    State(state): State<AppState>,
    Path((project_id, timeline_id, id)): Path<(DbId, DbId, DbId)>,
    Json(input): Json<UpdateProjectTimelineMedia>,
) -> AppResult<Json<ProjectTimelineMedia>> {
    ensure_timeline_exists(&state, project_id, timeline_id).await?;
    if let Some(title) = input.title.as_deref() {
        validate_length("title", title, 120)?;
    }
    if let Some(description) = input.description.as_deref() {
        validate_length("description", description, 200)?;
    }
    let media = ProjectTimelineMediaRepo::update(&state.pool, timeline_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectTimelineMedia",
            id,
        }))?;
    Ok(Json(media))
}

/// DELETE /api/v1/projects/{project_id}/timelines/{timeline_id}/media/{id}
pub async fn delete_media(
    State(state): State<AppState>,
    Path((project_id, timeline_id, id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_timeline_exists(&state, project_id, timeline_id).await?;
    let media = ProjectTimelineMediaRepo::find_by_id(&state.pool, timeline_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectTimelineMedia",
            id,
        }))?;
    ProjectTimelineMediaRepo::delete(&state.pool, timeline_id, id).await?;
    if let Some(path) = media.file_path.as_deref() {
        state.media.remove(path).await;
    }
    Ok(StatusCode::NO_CONTENT)
}
