use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::MediaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: showcase_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Uploaded-media store rooted at `MEDIA_ROOT`.
    pub media: Arc<MediaStore>,
}
