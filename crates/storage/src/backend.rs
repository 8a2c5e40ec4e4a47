use crate::{database::DatabaseStorage, memory::MemoryStorage, Storage};
use anyhow::Result;
use std::sync::Arc;

/// Storage backend type
pub enum StorageBackend {
    /// Volatile in-memory storage
    Memory,
    /// SQLite storage with database URL
    Database(String),
}

impl StorageBackend {
    /// Initialize storage backend based on type
    pub async fn initialize(self) -> Result<Arc<dyn Storage>> {
        match self {
            StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
            StorageBackend::Database(database_url) => {
                let storage = DatabaseStorage::new(&database_url).await?;
                Ok(Arc::new(storage))
            }
        }
    }
}
