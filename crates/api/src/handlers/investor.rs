//! Handlers for the `/investors` resource and its project attachments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_core::types::DbId;
use showcase_core::validate::validate_length;
use showcase_db::models::investor::{
    CreateInvestor, Investor, SetInvestorProjects, UpdateInvestor,
};
use showcase_db::models::project::Project;
use showcase_db::repositories::InvestorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/investors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInvestor>,
) -> AppResult<(StatusCode, Json<Investor>)> {
    validate_length("name", &input.name, 100)?;
    validate_length("profile_image", &input.profile_image, 100)?;
    let investor = InvestorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(investor)))
}

/// GET /api/v1/investors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Investor>>> {
    let investors = InvestorRepo::list(&state.pool).await?;
    Ok(Json(investors))
}

/// GET /api/v1/investors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Investor>> {
    let investor = InvestorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Investor",
            id,
        }))?;
    Ok(Json(investor))
}

/// PUT /api/v1/investors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInvestor>,
) -> AppResult<Json<Investor>> {
    if let Some(name) = input.name.as_deref() {
        validate_length("name", name, 100)?;
    }
    if let Some(profile_image) = input.profile_image.as_deref() {
        validate_length("profile_image", profile_image, 100)?;
    }
    let investor = InvestorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Investor",
            id,
        }))?;
    Ok(Json(investor))
}

/// DELETE /api/v1/investors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InvestorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Investor",
            id,
        }))
    }
}

async fn ensure_investor_exists(state: &AppState, id: DbId) -> AppResult<()> {
    InvestorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Investor",
            id,
        }))?;
    Ok(())
}

/// GET /api/v1/investors/{investor_id}/projects
pub async fn list_projects(
    State(state): State<AppState>,
    Path(investor_id): Path<DbId>,
) -> AppResult<Json<Vec<Project>>> {
    ensure_investor_exists(&state, investor_id).await?;
    let projects = InvestorRepo::list_projects(&state.pool, investor_id).await?;
    Ok(Json(projects))
}

/// PUT /api/v1/investors/{investor_id}/projects
///
/// Replaces the attachment set; returns the resulting project list.
pub async fn set_projects(
    State(state): State<AppState>,
    Path(investor_id): Path<DbId>,
    Json(input): Json<SetInvestorProjects>,
) -> AppResult<Json<Vec<Project>>> {
    ensure_investor_exists(&state, investor_id).await?;
    InvestorRepo::set_projects(&state.pool, investor_id, &input.project_ids).await?;
    let projects = InvestorRepo::list_projects(&state.pool, investor_id).await?;
    Ok(Json(projects))
}
