//! Route definitions for investors.

use axum::routing::get;
use axum::Router;

use crate::handlers::investor;
use crate::state::AppState;

/// Investor routes mounted at `/investors`.
///
/// ```text
/// GET    /                        -> list (by name)
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete (detaches from projects)
/// GET    /{investor_id}/projects  -> list_projects
/// PUT    /{investor_id}/projects  -> set_projects (replace attachment set)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(investor::list).post(investor::create))
        .route(
            "/{id}",
            get(investor::get_by_id)
                .put(investor::update)
                .delete(investor::delete),
        )
        .route(
            "/{investor_id}/projects",
            get(investor::list_projects).put(investor::set_projects),
        )
}
