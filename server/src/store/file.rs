//! File-backed roadmap store.
//!
//! DESIGN
//! ======
//! One JSON-encoded record per line, appended on save. Reads scan the whole
//! file in order; records are never rewritten, so each id appears once.
//!
//! ERROR HANDLING
//! ==============
//! Blank lines are ignored and undecodable lines are skipped with a warning,
//! so one corrupt line does not hide every other roadmap.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use super::{RoadmapStore, StoreError};
use crate::state::RoadmapRecord;

pub struct FileStore {
    path: PathBuf,
    /// Serializes appends against full-file reads.
    lock: Mutex<()>,
}

impl FileStore {
    /// Open the data file, creating it and its parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directories or file cannot be created.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        OpenOptions::new().create(true).append(true).open(&path).await?;
        Ok(Self { path, lock: Mutex::new(()) })
    }

    async fn read_all(&self) -> Result<Vec<RoadmapRecord>, StoreError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(parse_records(&contents))
    }
}

/// Decode a JSON lines document in file order.
pub(crate) fn parse_records(contents: &str) -> Vec<RoadmapRecord> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match serde_json::from_str::<RoadmapRecord>(line.trim()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping undecodable roadmap line");
                None
            }
        })
        .collect()
}

#[async_trait]
impl RoadmapStore for FileStore {
    async fn save(&self, record: RoadmapRecord) -> Result<RoadmapRecord, StoreError> {
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let _guard = self.lock.lock().await;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path).await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoadmapRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.into_iter().find(|r| r.id == id))
    }

    async fn find_all(&self) -> Result<Vec<RoadmapRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
