//! Shared handler state.

use std::sync::Arc;

use fruitstand_store::FruitRepository;
use tokio::sync::RwLock;

/// The fruit repository shared by every request handler.
///
/// Created once at startup and handed to the router; cloning only clones the
/// handle. `create` holds the write lock for its whole check-then-append.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    repository: Arc<RwLock<FruitRepository>>,
}

impl AppState {
    /// State over an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared repository
    pub fn repository(&self) -> &Arc<RwLock<FruitRepository>> {
        &self.repository
    }

    /// Empty the store between test runs.
    pub async fn reset(&self) {
        self.repository.write().await.reset();
    }
}
