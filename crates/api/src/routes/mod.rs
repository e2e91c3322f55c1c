pub mod amenities;
pub mod enquiries;
pub mod health;
pub mod investors;
pub mod projects;
pub mod settings;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /settings/groups                     list, create
/// /settings/groups/suggest             title-prefix autocomplete
/// /settings/groups/{id}                get, update, delete (protected while referenced)
/// /settings                            list, create
/// /settings/{id}                       get, update, delete
///
/// /testimonials                        list, create
/// /testimonials/{id}                   get, update, delete
///
/// /enquiries                           list (no create; public form owns intake)
/// /enquiries/{id}                      get, update, delete
///
/// /amenities                           list, create
/// /amenities/{id}                      get, update, delete
///
/// /projects                            list, create
/// /projects/{id}                       get, update, delete
/// /projects/{project_id}/amenities     list, replace attachment set
/// /projects/{project_id}/images        list, upload; {id}: get, update, delete
/// /projects/{project_id}/docs          list, upload; {id}: get, update, delete
/// /projects/{project_id}/floor-plans   list, upload; {id}: get, update, delete
/// /projects/{project_id}/highlights    list, create; {id}: get, update, delete
/// /projects/{project_id}/timelines     list, create; {id}: get, update, delete
/// /projects/{project_id}/timelines/{timeline_id}/media
///                                      list, upload; {id}: get, update, delete
///
/// /investors                           list, create
/// /investors/{id}                      get, update, delete
/// /investors/{investor_id}/projects    list, replace attachment set
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Site settings, grouped; groups nest first so `/settings/groups`
        // wins over `/settings/{id}`.
        .nest("/settings/groups", settings::groups_router())
        .nest("/settings", settings::router())
        // Customer testimonials.
        .nest("/testimonials", testimonials::router())
        // Contact-form enquiries (read, triage, prune).
        .nest("/enquiries", enquiries::router())
        // Amenity catalog, attachable to projects.
        .nest("/amenities", amenities::router())
        // Projects and their nested sub-resources.
        .nest("/projects", projects::router())
        // Investor profiles and project attachments.
        .nest("/investors", investors::router())
}
