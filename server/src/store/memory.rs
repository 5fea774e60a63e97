//! In-memory roadmap store. Contents live for the process lifetime.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{RoadmapStore, StoreError};
use crate::state::RoadmapRecord;

/// Insertion-ordered store backed by a `Vec`.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<RoadmapRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoadmapStore for MemoryStore {
    async fn save(&self, record: RoadmapRecord) -> Result<RoadmapRecord, StoreError> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoadmapRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<RoadmapRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
