//! Local media store for uploaded files.
//!
//! Stores files beneath `MEDIA_ROOT` at relative paths produced by the
//! upload-path convention in `showcase_core::uploads`, and removes them
//! again when their owning row is deleted. Missing files on delete are not
//! an error: the database row is the source of truth.

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Writes and removes uploaded files under a root directory.
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path for a convention-relative media path.
    pub fn absolute(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Persist `bytes` at `relative`, creating parent directories as needed.
    pub async fn save(&self, relative: &str, bytes: &[u8]) -> Result<(), AppError> {
        let path = self.absolute(relative);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::InternalError(format!("Creating media dir: {e}")))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Writing media file: {e}")))?;
        Ok(())
    }

    /// Persist `bytes` at `relative`, shifting to a suffixed basename when a
    /// file already occupies that path. Returns the relative path actually
    /// written, which is what the database row must store.
    pub async fn save_unique(&self, relative: &str, bytes: &[u8]) -> Result<String, AppError> {
        let mut target = relative.to_string();
        while matches!(tokio::fs::try_exists(self.absolute(&target)).await, Ok(true)) {
            target = dedup_name(relative);
        }
        self.save(&target, bytes).await?;
        Ok(target)
    }

    /// Remove the file at `relative`, ignoring files that are already gone.
    pub async fn remove(&self, relative: &str) {
        let path = self.absolute(relative);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove media file");
            }
        }
    }

    /// Remove the directory subtree at `relative`, ignoring one that is
    /// already gone. Used when a cascade delete takes out every row whose
    /// files live under a common prefix.
    pub async fn remove_dir(&self, relative: &str) {
        let path = self.absolute(relative);
        if let Err(e) = tokio::fs::remove_dir_all(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove media directory");
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// `front.jpg` becomes `front-1a2b3c4d.jpg`; names without an extension get
/// the tag at the end. Only the basename changes.
fn dedup_name(relative: &str) -> String {
    let (dir, name) = match relative.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, relative),
    };

    let tag = uuid::Uuid::new_v4().simple().to_string();
    let tag = &tag[..8];
    let renamed = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{tag}.{ext}"),
        _ => format!("{name}-{tag}"),
    };

    match dir {
        Some(dir) => format!("{dir}/{renamed}"),
        None => renamed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_name_tags_before_the_extension() {
        let renamed = dedup_name("projects/1/images/front.jpg");
        assert!(renamed.starts_with("projects/1/images/front-"));
        assert!(renamed.ends_with(".jpg"));
        assert_ne!(renamed, "projects/1/images/front.jpg");
    }

    #[test]
    fn dedup_name_handles_missing_extension_and_dirs() {
        assert!(dedup_name("README").starts_with("README-"));
        assert!(dedup_name("docs/.hidden").starts_with("docs/.hidden-"));
    }

    #[tokio::test]
    async fn save_unique_keeps_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let first = store
            .save_unique("projects/1/images/a.jpg", b"one")
            .await
            .unwrap();
        let second = store
            .save_unique("projects/1/images/a.jpg", b"two")
            .await
            .unwrap();

        assert_eq!(first, "projects/1/images/a.jpg");
        assert_ne!(second, first);
        assert_eq!(std::fs::read(dir.path().join(&first)).unwrap(), b"one");
        assert_eq!(std::fs::read(dir.path().join(&second)).unwrap(), b"two");
    }

    #[tokio::test]
    async fn remove_dir_ignores_missing_subtree() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        store.save("projects/2/images/a.jpg", b"data").await.unwrap();
        store.remove_dir("projects/2").await;
        assert!(!dir.path().join("projects/2").exists());

        // Already gone: a no-op, not an error.
        store.remove_dir("projects/2").await;
    }
}
