use std::sync::Arc;

use cvstodia_storage::StorageClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cvstodia_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object-storage client for image uploads. `None` when the bucket is
    /// not configured; upload requests then fail with 503 instead of
    /// touching any implicit global.
    pub storage: Option<Arc<StorageClient>>,
}
