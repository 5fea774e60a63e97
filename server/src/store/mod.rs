//! Roadmap storage adapters.
//!
//! ARCHITECTURE
//! ============
//! `RoadmapStore` is the persistence port used by the roadmap service. Three
//! adapters implement it: process memory, an append-only JSON lines file, and
//! Postgres. `open` picks one from [`StorageConfig`].
//!
//! INVARIANTS
//! ==========
//! `find_all` returns records in a stable order (insertion order for memory
//! and file, creation time for Postgres). Stores never assign ids.

pub mod file;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::state::RoadmapRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record encoding error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence port for roadmap records.
#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Persist a new record. Records are immutable once saved.
    async fn save(&self, record: RoadmapRecord) -> Result<RoadmapRecord, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoadmapRecord>, StoreError>;

    async fn find_all(&self) -> Result<Vec<RoadmapRecord>, StoreError>;

    /// Short adapter name for logs.
    fn kind(&self) -> &'static str;
}

/// Open the store selected by configuration.
///
/// # Errors
///
/// Returns an error if the data file cannot be created or the database is
/// unreachable or fails to migrate.
pub async fn open(config: &StorageConfig) -> Result<Arc<dyn RoadmapStore>, StoreError> {
    let store: Arc<dyn RoadmapStore> = match config {
        StorageConfig::Memory => Arc::new(memory::MemoryStore::new()),
        StorageConfig::File(path) => Arc::new(file::FileStore::open(path.clone()).await?),
        StorageConfig::Postgres { url, max_connections } => {
            let pool = crate::db::init_pool(url, *max_connections).await?;
            Arc::new(postgres::PgStore::new(pool))
        }
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_memory_store() {
        let store = open(&StorageConfig::Memory).await.unwrap();
        assert_eq!(store.kind(), "memory");
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn open_file_store_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("roadmaps.jsonl");
        let store = open(&StorageConfig::File(path.clone())).await.unwrap();
        assert_eq!(store.kind(), "file");
        assert!(path.exists());
    }
}
