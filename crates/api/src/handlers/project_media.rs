//! Handlers for the file-backed project sub-resources: gallery images,
//! documents, and floor plans.
//!
//! Creation is a multipart upload: the file is persisted under the
//! deterministic upload-path convention (colliding filenames get a unique
//! suffix), then the row is inserted. PUT edits metadata only; replacing a
//! file means delete and re-upload.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::uploads::{
    project_doc_path, project_floor_plan_path, project_image_path, sanitize_filename,
};
use showcase_core::validate::{validate_length, validate_opt_length};
use showcase_db::models::floor_plan::{
    CreateProjectFloorPlan, ProjectFloorPlan, UpdateProjectFloorPlan,
};
use showcase_db::models::project_doc::{CreateProjectDoc, ProjectDoc, UpdateProjectDoc};
use showcase_db::models::project_image::{
    CreateProjectImage, ProjectImage, UpdateProjectImage,
};
use showcase_db::repositories::{ProjectDocRepo, ProjectFloorPlanRepo, ProjectImageRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::project::ensure_project_exists;
use crate::state::AppState;

/// A parsed multipart upload form: at most one file plus free text fields.
pub(crate) struct UploadForm {
    pub file: Option<(String, Vec<u8>)>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// The uploaded file, or 400 when the `file` part is missing.
    pub fn require_file(self) -> AppResult<(String, Vec<u8>)> {
        self.file
            .ok_or_else(|| AppError::BadRequest("Missing 'file' field".to_string()))
    }
}

/// Drain a multipart stream into an [`UploadForm`].
///
/// The file part must be named `file`; every other part is treated as text.
/// Client filenames are reduced to a safe basename, falling back to a
/// generated name when nothing usable remains.
pub(crate) async fn read_upload_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut file = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field
                .file_name()
                .and_then(sanitize_filename)
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, data.to_vec()));
        } else if !name.is_empty() {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            fields.insert(name, text);
        }
    }

    Ok(UploadForm { file, fields })
}

// ---------------------------------------------------------------------------
// Gallery images
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{project_id}/images (multipart: file, caption?)
pub async fn upload_image(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProjectImage>)> {
    ensure_project_exists(&state, project_id).await?;

    let mut form = read_upload_form(multipart).await?;
    let caption = form.fields.remove("caption");
    validate_opt_length("caption", caption.as_deref(), 120)?;
    let (filename, bytes) = form.require_file()?;

    let file_path = state
        .media
        .save_unique(&project_image_path(project_id, &filename), &bytes)
        .await?;

    let image =
        ProjectImageRepo::create(&state.pool, project_id, &CreateProjectImage { file_path, caption })
            .await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// GET /api/v1/projects/{project_id}/images
pub async fn list_images(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectImage>>> {
    ensure_project_exists(&state, project_id).await?;
    let images = ProjectImageRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(images))
}

/// GET /api/v1/projects/{project_id}/images/{id}
pub async fn get_image(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectImage>> {
    let image = ProjectImageRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectImage",
            id,
        }))?;
    Ok(Json(image))
}

/// PUT /api/v1/projects/{project_id}/images/{id}
pub async fn update_image(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjectImage>,
) -> AppResult<Json<ProjectImage>> {
    validate_opt_length("caption", input.caption.as_deref(), 120)?;
    let image = ProjectImageRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectImage",
            id,
        }))?;
    Ok(Json(image))
}

/// DELETE /api/v1/projects/{project_id}/images/{id}
pub async fn delete_image(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let image = ProjectImageRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectImage",
            id,
        }))?;
    ProjectImageRepo::delete(&state.pool, project_id, id).await?;
    state.media.remove(&image.file_path).await;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{project_id}/docs (multipart: file, name?)
///
/// The display name defaults to the uploaded filename.
pub async fn upload_doc(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProjectDoc>)> {
    ensure_project_exists(&state, project_id).await?;

    let mut form = read_upload_form(multipart).await?;
    let name = form.fields.remove("name");
    let (filename, bytes) = form.require_file()?;

    let name = name.unwrap_or_else(|| filename.clone());
    validate_length("name", &name, 100)?;

    let file_path = state
        .media
        .save_unique(&project_doc_path(project_id, &filename), &bytes)
        .await?;

    let doc =
        ProjectDocRepo::create(&state.pool, project_id, &CreateProjectDoc { name, file_path })
            .await?;
    Ok((StatusCode::CREATED, Json(doc)))
}

/// GET /api/v1/projects/{project_id}/docs
pub async fn list_docs(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectDoc>>> {
    ensure_project_exists(&state, project_id).await?;
    let docs = ProjectDocRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(docs))
}

/// GET /api/v1/projects/{project_id}/docs/{id}
pub async fn get_doc(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectDoc>> {
    let doc = ProjectDocRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectDoc",
            id,
        }))?;
    Ok(Json(doc))
}

/// PUT /api/v1/projects/{project_id}/docs/{id}
pub async fn update_doc(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjectDoc>,
) -> AppResult<Json<ProjectDoc>> {
    if let Some(name) = input.name.as_deref() {
        validate_length("name", name, 100)?;
    }
    let doc = ProjectDocRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectDoc",
            id,
        }))?;
    Ok(Json(doc))
}

/// DELETE /api/v1/projects/{project_id}/docs/{id}
pub async fn delete_doc(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let doc = ProjectDocRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectDoc",
            id,
        }))?;
    ProjectDocRepo::delete(&state.pool, project_id, id).await?;
    state.media.remove(&doc.file_path).await;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Floor plans
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{project_id}/floor-plans
/// (multipart: file, title, area)
pub async fn upload_floor_plan(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProjectFloorPlan>)> {
    ensure_project_exists(&state, project_id).await?;

    let mut form = read_upload_form(multipart).await?;
    let title = form
        .fields
        .remove("title")
        .ok_or_else(|| AppError::BadRequest("Missing 'title' field".to_string()))?;
    validate_length("title", &title, 100)?;
    let area: f64 = form
        .fields
        .remove("area")
        .ok_or_else(|| AppError::BadRequest("Missing 'area' field".to_string()))?
        .parse()
        .map_err(|_| AppError::BadRequest("'area' must be a number".to_string()))?;
    let (filename, bytes) = form.require_file()?;

    let file_path = state
        .media
        .save_unique(&project_floor_plan_path(project_id, &filename), &bytes)
        .await?;

    let plan = ProjectFloorPlanRepo::create(
        &state.pool,
        project_id,
        &CreateProjectFloorPlan { title, file_path, area },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/projects/{project_id}/floor-plans
pub async fn list_floor_plans(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectFloorPlan>>> {
    ensure_project_exists(&state, project_id).await?;
    let plans = ProjectFloorPlanRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(plans))
}

/// GET /api/v1/projects/{project_id}/floor-plans/{id}
pub async fn get_floor_plan(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ProjectFloorPlan>> {
    let plan = ProjectFloorPlanRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectFloorPlan",
            id,
        }))?;
    Ok(Json(plan))
}

/// PUT /api/v1/projects/{project_id}/floor-plans/{id}
pub async fn update_floor_plan(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjectFloorPlan>,
) -> AppResult<Json<ProjectFloorPlan>> {
    if let Some(title) = input.title.as_deref() {
        validate_length("title", title, 100)?;
    }
    let plan = ProjectFloorPlanRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectFloorPlan",
            id,
        }))?;
    Ok(Json(plan))
}

/// DELETE /api/v1/projects/{project_id}/floor-plans/{id}
pub async fn delete_floor_plan(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let plan = ProjectFloorPlanRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectFloorPlan",
            id,
        }))?;
    ProjectFloorPlanRepo::delete(&state.pool, project_id, id).await?;
    state.media.remove(&plan.file_path).await;
    Ok(StatusCode::NO_CONTENT)
}
