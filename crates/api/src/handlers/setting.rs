//! Handlers for the `/settings` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::validate::validate_length;
use showcase_db::models::setting::{CreateSetting, Setting, UpdateSetting};
use showcase_db::repositories::{SettingGroupRepo, SettingRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Resolve a group slug against existing groups, mirroring the admin
/// autocomplete widget which only offers existing entries.
async fn ensure_group_exists(state: &AppState, group_slug: &str) -> AppResult<()> {
    if SettingGroupRepo::find_by_slug(&state.pool, group_slug)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown setting group '{group_slug}'"
        ))));
    }
    Ok(())
}

/// POST /api/v1/settings
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSetting>,
) -> AppResult<(StatusCode, Json<Setting>)> {
    validate_length("name", &input.name, 100)?;
    ensure_group_exists(&state, &input.group_slug).await?;
    let setting = SettingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(setting)))
}

/// Query parameters for listing settings.
#[derive(Debug, Deserialize)]
pub struct ListSettingsParams {
    /// Restrict the listing to one group.
    pub group_slug: Option<String>,
}

/// GET /api/v1/settings
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListSettingsParams>,
) -> AppResult<Json<Vec<Setting>>> {
    let settings = match params.group_slug.as_deref() {
        // At most one setting per group.
        Some(group_slug) => SettingRepo::find_by_group_slug(&state.pool, group_slug)
            .await?
            .into_iter()
            .collect(),
        None => SettingRepo::list(&state.pool).await?,
    };
    Ok(Json(settings))
}

/// GET /api/v1/settings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Setting>> {
    let setting = SettingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Setting",
            id,
        }))?;
    Ok(Json(setting))
}

/// PUT /api/v1/settings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSetting>,
) -> AppResult<Json<Setting>> {
    if let Some(name) = input.name.as_deref() {
        validate_length("name", name, 100)?;
    }
    if let Some(group_slug) = input.group_slug.as_deref() {
        ensure_group_exists(&state, group_slug).await?;
    }
    let setting = SettingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Setting",
            id,
        }))?;
    Ok(Json(setting))
}

/// DELETE /api/v1/settings/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SettingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Setting",
            id,
        }))
    }
}
