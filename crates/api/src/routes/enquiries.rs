//! Route definitions for enquiries.
//!
//! Enquiries arrive through the public contact form, not this API, so no
//! POST is mounted here; creation attempts get a 405 from the router.

use axum::routing::get;
use axum::Router;

use crate::handlers::enquiry;
use crate::state::AppState;

/// Enquiry routes mounted at `/enquiries`.
///
/// ```text
/// GET    /            -> list (paginated)
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enquiry::list))
        .route(
            "/{id}",
            get(enquiry::get_by_id)
                .put(enquiry::update)
                .delete(enquiry::delete),
        )
}
