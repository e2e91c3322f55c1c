//! Handlers for the `/settings/groups` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::slug::{is_valid_slug, resolve_slug};
use showcase_core::types::DbId;
use showcase_core::validate::validate_length;
use showcase_db::models::setting_group::{
    CreateSettingGroup, SettingGroup, SettingGroupSuggestion, UpdateSettingGroup,
};
use showcase_db::repositories::SettingGroupRepo;

use crate::error::{AppError, AppResult};
use crate::query::SuggestParams;
use crate::state::AppState;

/// POST /api/v1/settings/groups
///
/// The slug is prepopulated from the title when omitted.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSettingGroup>,
) -> AppResult<(StatusCode, Json<SettingGroup>)> {
    validate_length("title", &input.title, 100)?;
    let slug = resolve_slug(&input.title, input.slug.as_deref())?;
    let group = SettingGroupRepo::create(&state.pool, &input.title, &slug).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /api/v1/settings/groups
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SettingGroup>>> {
    let groups = SettingGroupRepo::list(&state.pool).await?;
    Ok(Json(groups))
}

/// GET /api/v1/settings/groups/suggest?q=&limit=
///
/// Autocomplete lookup for the admin group-selection widget.
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> AppResult<Json<Vec<SettingGroupSuggestion>>> {
    let suggestions = SettingGroupRepo::suggest(&state.pool, &params.q, params.limit).await?;
    Ok(Json(suggestions))
}

/// GET /api/v1/settings/groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SettingGroup>> {
    let group = SettingGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SettingGroup",
            id,
        }))?;
    Ok(Json(group))
}

/// PUT /api/v1/settings/groups/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSettingGroup>,
) -> AppResult<Json<SettingGroup>> {
    if let Some(title) = input.title.as_deref() {
        validate_length("title", title, 100)?;
    }
    if let Some(slug) = input.slug.as_deref() {
        if !is_valid_slug(slug) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid slug '{slug}'"
            ))));
        }
    }
    let group = SettingGroupRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SettingGroup",
            id,
        }))?;
    Ok(Json(group))
}

/// DELETE /api/v1/settings/groups/{id}
///
/// Rejected with 409 while a setting still references the group.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SettingGroupRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SettingGroup",
            id,
        }))
    }
}
