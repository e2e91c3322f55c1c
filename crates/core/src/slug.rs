//! Slug derivation and validation.
//!
//! Slugs are URL-safe, unique short identifiers derived from a title. The
//! admin forms prepopulate the slug from the title when the client omits it;
//! a client-supplied slug must already be in canonical form.

use crate::error::CoreError;

/// Maximum slug length, matching the `VARCHAR(50)` column width.
pub const MAX_SLUG_LEN: usize = 50;

/// Derive a slug from a free-form title.
///
/// Lowercases, keeps ASCII alphanumerics, collapses every other run of
/// characters into a single hyphen, and trims hyphens from both ends. The
/// result is truncated to [`MAX_SLUG_LEN`] without leaving a trailing hyphen.
///
/// # Examples
///
/// ```
/// use showcase_core::slug::slugify;
///
/// assert_eq!(slugify("Green Meadows Phase II"), "green-meadows-phase-ii");
/// assert_eq!(slugify("  Hello,  World!  "), "hello-world");
/// assert_eq!(slugify("Üñïcode Títle"), "code-t-tle");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Check whether `slug` is already in canonical form.
///
/// Canonical means non-empty, within [`MAX_SLUG_LEN`], only lowercase ASCII
/// alphanumerics and single interior hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= MAX_SLUG_LEN && slugify(slug) == slug
}

/// Resolve the slug for a create request: use the client-supplied slug when
/// present (rejecting non-canonical input), otherwise derive one from `title`.
pub fn resolve_slug(title: &str, supplied: Option<&str>) -> Result<String, CoreError> {
    match supplied {
        Some(slug) => {
            if is_valid_slug(slug) {
                Ok(slug.to_string())
            } else {
                Err(CoreError::Validation(format!(
                    "Invalid slug '{slug}'. Slugs are lowercase alphanumerics separated by single hyphens"
                )))
            }
        }
        None => {
            let slug = slugify(title);
            if slug.is_empty() {
                Err(CoreError::Validation(
                    "Cannot derive a slug from the given title".to_string(),
                ))
            } else {
                Ok(slug)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Riverside Towers"), "riverside-towers");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("A -- B // C"), "a-b-c");
    }

    #[test]
    fn slugify_trims_edges() {
        assert_eq!(slugify("--edge case--"), "edge-case");
    }

    #[test]
    fn slugify_truncates_without_trailing_hyphen() {
        let long = "word ".repeat(30);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn valid_slug_round_trips() {
        assert!(is_valid_slug("green-meadows-2"));
        assert!(!is_valid_slug("Green-Meadows"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn resolve_prefers_supplied_slug() {
        assert_eq!(
            resolve_slug("Some Title", Some("custom-slug")).unwrap(),
            "custom-slug"
        );
    }

    #[test]
    fn resolve_rejects_bad_supplied_slug() {
        assert!(resolve_slug("Some Title", Some("Not A Slug")).is_err());
    }

    #[test]
    fn resolve_derives_when_omitted() {
        assert_eq!(resolve_slug("Some Title", None).unwrap(), "some-title");
    }

    #[test]
    fn resolve_fails_on_underivable_title() {
        assert!(resolve_slug("!!!", None).is_err());
    }
}
