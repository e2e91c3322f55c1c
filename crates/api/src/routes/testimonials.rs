//! Route definitions for testimonials.

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Testimonial routes mounted at `/testimonials`.
///
/// ```text
/// GET    /            -> list (paginated)
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonial::list).post(testimonial::create))
        .route(
            "/{id}",
            get(testimonial::get_by_id)
                .put(testimonial::update)
                .delete(testimonial::delete),
        )
}
