//! Route definitions for setting groups and their settings.
//!
//! Two routers are provided:
//! - `groups_router()` for group CRUD and suggestions, mounted at
//!   `/settings/groups`
//! - `router()` for setting CRUD, mounted at `/settings`

use axum::routing::get;
use axum::Router;

use crate::handlers::{setting, setting_group};
use crate::state::AppState;

/// Setting group routes mounted at `/settings/groups`.
///
/// `/suggest` is registered ahead of `/{id}` so the literal segment wins.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /suggest     -> suggest (autocomplete by title prefix)
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete (409 while settings reference the group)
/// ```
pub fn groups_router() -> Router<AppState> {
    Router::new()
        .route("/", get(setting_group::list).post(setting_group::create))
        .route("/suggest", get(setting_group::suggest))
        .route(
            "/{id}",
            get(setting_group::get_by_id)
                .put(setting_group::update)
                .delete(setting_group::delete),
        )
}

/// Setting routes mounted at `/settings`.
///
/// ```text
/// GET    /            -> list (optional ?group_slug= filter)
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(setting::list).post(setting::create))
        .route(
            "/{id}",
            get(setting::get_by_id)
                .put(setting::update)
                .delete(setting::delete),
        )
}
