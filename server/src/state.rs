//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the roadmap store selected at startup; handlers never know which
//! adapter backs it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::store::RoadmapStore;

// =============================================================================
// ROADMAP RECORD
// =============================================================================

/// Stored representation of a roadmap. Mirrors the `roadmaps` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl RoadmapRecord {
    /// Fresh record with a server-assigned id and the current time.
    #[must_use]
    pub fn new(title: String, description: String) -> Self {
        Self { id: Uuid::new_v4(), title, description, created_at: now_micros() }
    }
}

/// Current UTC time truncated to microseconds, the resolution of `TIMESTAMPTZ`.
fn now_micros() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000))
}

impl From<RoadmapRecord> for roadmaps::Roadmap {
    fn from(record: RoadmapRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            description: record.description,
            created_at: record.created_at.format(&Rfc3339).ok(),
        }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RoadmapStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn RoadmapStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
