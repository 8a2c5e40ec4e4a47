//! Server application state

use std::sync::Arc;
use storage::Storage;

/// Shared application state: the storage backend selected at startup
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}
