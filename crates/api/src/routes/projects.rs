//! Route definitions for projects and their nested sub-resources.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{highlight, project, project_media, timeline};
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET    /                                    -> list (paginated, default ordering)
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete (children cascade)
///
/// GET    /{project_id}/amenities              -> list_amenities
/// PUT    /{project_id}/amenities              -> set_amenities (replace set)
///
/// GET    /{project_id}/images                 -> list_images
/// POST   /{project_id}/images                 -> upload_image (multipart)
/// GET    /{project_id}/images/{id}            -> get_image
/// PUT    /{project_id}/images/{id}            -> update_image (metadata only)
/// DELETE /{project_id}/images/{id}            -> delete_image (prunes file)
///
/// GET    /{project_id}/docs                   -> list_docs
/// POST   /{project_id}/docs                   -> upload_doc (multipart)
/// GET    /{project_id}/docs/{id}              -> get_doc
/// PUT    /{project_id}/docs/{id}              -> update_doc
/// DELETE /{project_id}/docs/{id}              -> delete_doc
///
/// GET    /{project_id}/floor-plans            -> list_floor_plans
/// POST   /{project_id}/floor-plans            -> upload_floor_plan (multipart)
/// GET    /{project_id}/floor-plans/{id}       -> get_floor_plan
/// PUT    /{project_id}/floor-plans/{id}       -> update_floor_plan
/// DELETE /{project_id}/floor-plans/{id}       -> delete_floor_plan
///
/// GET    /{project_id}/highlights             -> list_by_project
/// POST   /{project_id}/highlights             -> create
/// GET    /{project_id}/highlights/{id}        -> get_by_id
/// PUT    /{project_id}/highlights/{id}        -> update
/// DELETE /{project_id}/highlights/{id}        -> delete
///
/// GET    /{project_id}/timelines              -> list_by_project
/// POST   /{project_id}/timelines              -> create
/// GET    /{project_id}/timelines/{id}         -> get_by_id
/// PUT    /{project_id}/timelines/{id}         -> update
/// DELETE /{project_id}/timelines/{id}         -> delete (prunes media files)
///
/// GET    /{project_id}/timelines/{timeline_id}/media        -> list_media
/// POST   /{project_id}/timelines/{timeline_id}/media        -> upload_media (multipart)
/// GET    /{project_id}/timelines/{timeline_id}/media/{id}   -> get_media
/// PUT    /{project_id}/timelines/{timeline_id}/media/{id}   -> update_media
/// DELETE /{project_id}/timelines/{timeline_id}/media/{id}   -> delete_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/{project_id}/amenities",
            put(project::set_amenities).get(project::list_amenities),
        )
        .route(
            "/{project_id}/images",
            get(project_media::list_images).post(project_media::upload_image),
        )
        .route(
            "/{project_id}/images/{id}",
            get(project_media::get_image)
                .put(project_media::update_image)
                .delete(project_media::delete_image),
        )
        .route(
            "/{project_id}/docs",
            get(project_media::list_docs).post(project_media::upload_doc),
        )
        .route(
            "/{project_id}/docs/{id}",
            get(project_media::get_doc)
                .put(project_media::update_doc)
                .delete(project_media::delete_doc),
        )
        .route(
            "/{project_id}/floor-plans",
            get(project_media::list_floor_plans).post(project_media::upload_floor_plan),
        )
        .route(
            "/{project_id}/floor-plans/{id}",
            get(project_media::get_floor_plan)
                .put(project_media::update_floor_plan)
                .delete(project_media::delete_floor_plan),
        )
        .route(
            "/{project_id}/highlights",
            get(highlight::list_by_project).post(highlight::create),
        )
        .route(
            "/{project_id}/highlights/{id}",
            get(highlight::get_by_id)
                .put(highlight::update)
                .delete(highlight::delete),
        )
        .route(
            "/{project_id}/timelines",
            get(timeline::list_by_project).post(timeline::create),
        )
        .route(
            "/{project_id}/timelines/{id}",
            get(timeline::get_by_id)
                .put(timeline::update)
                .delete(timeline::delete),
        )
        .route(
            "/{project_id}/timelines/{timeline_id}/media",
            get(timeline::list_media).post(timeline::upload_media),
        )
        .route(
            "/{project_id}/timelines/{timeline_id}/media/{id}",
            get(timeline::get_media)
                .put(timeline::update_media)
                .delete(timeline::delete_media),
        )
}
