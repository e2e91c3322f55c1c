//! Upload path convention engine.
//!
//! Every uploaded file lands under a deterministic, project-scoped relative
//! path: `projects/<project-id>/<category>/<filename>`, with timeline media
//! one level deeper at `projects/<project-id>/timelines/<timeline-id>/<filename>`.
//! Paths are relative to the configured media root; the API layer joins them
//! onto disk and serves them back under `/media`.

use crate::types::DbId;

/// Category segment for project gallery images.
pub const CATEGORY_IMAGES: &str = "images";

/// Category segment for downloadable project documents.
pub const CATEGORY_DOCS: &str = "docs";

/// Category segment for floor plan images.
pub const CATEGORY_FLOOR_PLANS: &str = "floor-plans";

/// Category segment for timeline media.
pub const CATEGORY_TIMELINES: &str = "timelines";

/// Root directory for every file a project owns, across all categories.
///
/// ```
/// use showcase_core::uploads::project_media_dir;
///
/// assert_eq!(project_media_dir(7), "projects/7");
/// ```
pub fn project_media_dir(project_id: DbId) -> String {
    format!("projects/{project_id}")
}

/// Relative storage path for a project gallery image.
///
/// ```
/// use showcase_core::uploads::project_image_path;
///
/// assert_eq!(project_image_path(7, "front.jpg"), "projects/7/images/front.jpg");
/// ```
pub fn project_image_path(project_id: DbId, filename: &str) -> String {
    format!("projects/{project_id}/{CATEGORY_IMAGES}/{filename}")
}

/// Relative storage path for a project document.
pub fn project_doc_path(project_id: DbId, filename: &str) -> String {
    format!("projects/{project_id}/{CATEGORY_DOCS}/{filename}")
}

/// Relative storage path for a project floor plan.
pub fn project_floor_plan_path(project_id: DbId, filename: &str) -> String {
    format!("projects/{project_id}/{CATEGORY_FLOOR_PLANS}/{filename}")
}

/// Relative storage path for a timeline media file.
///
/// ```
/// use showcase_core::uploads::timeline_media_path;
///
/// assert_eq!(
///     timeline_media_path(7, 3, "pour.pdf"),
///     "projects/7/timelines/3/pour.pdf"
/// );
/// ```
pub fn timeline_media_path(project_id: DbId, timeline_id: DbId, filename: &str) -> String {
    format!("projects/{project_id}/{CATEGORY_TIMELINES}/{timeline_id}/{filename}")
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Strips any path components (both separators), drops NUL bytes, and trims
/// whitespace. Returns `None` when nothing usable remains, in which case the
/// caller should generate a name instead.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim()
        .replace('\0', "");

    if base.is_empty() || base == "." || base == ".." {
        None
    } else {
        Some(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_embeds_project_id_and_category() {
        let path = project_image_path(42, "hero.png");
        assert!(path.contains("/42/"));
        assert!(path.contains("/images/"));
        assert_eq!(path, "projects/42/images/hero.png");
    }

    #[test]
    fn doc_and_floor_plan_paths_use_their_segments() {
        assert_eq!(project_doc_path(1, "brochure.pdf"), "projects/1/docs/brochure.pdf");
        assert_eq!(
            project_floor_plan_path(1, "2bhk.png"),
            "projects/1/floor-plans/2bhk.png"
        );
    }

    #[test]
    fn timeline_media_path_embeds_both_ids() {
        assert_eq!(
            timeline_media_path(5, 9, "slab.csv"),
            "projects/5/timelines/9/slab.csv"
        );
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_filename("C:\\uploads\\site.jpg").as_deref(),
            Some("site.jpg")
        );
    }

    #[test]
    fn sanitize_rejects_empty_and_dot_names() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("  "), None);
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename("uploads/"), None);
    }
}
