//! Postgres-backed roadmap store.

use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{RoadmapStore, StoreError};
use crate::state::RoadmapRecord;

type RoadmapRow = (Uuid, String, String, OffsetDateTime);

fn from_row((id, title, description, created_at): RoadmapRow) -> RoadmapRecord {
    RoadmapRecord { id, title, description, created_at }
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoadmapStore for PgStore {
    async fn save(&self, record: RoadmapRecord) -> Result<RoadmapRecord, StoreError> {
        sqlx::query(
            "INSERT INTO roadmaps (id, title, description, created_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoadmapRecord>, StoreError> {
        let row = sqlx::query_as::<_, RoadmapRow>(
            "SELECT id, title, description, created_at FROM roadmaps WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(from_row))
    }

    async fn find_all(&self) -> Result<Vec<RoadmapRecord>, StoreError> {
        let rows = sqlx::query_as::<_, RoadmapRow>(
            "SELECT id, title, description, created_at FROM roadmaps ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}
