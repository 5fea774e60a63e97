//! Roadmap service: create, fetch and list.
//!
//! DESIGN
//! ======
//! The server is the only place ids and timestamps are assigned. Drafts are
//! validated here rather than in the route so every entry point shares the
//! same title rule.

use roadmaps::{DraftError, NewRoadmap};
use tracing::info;
use uuid::Uuid;

use crate::state::{AppState, RoadmapRecord};
use crate::store::StoreError;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    #[error("{0}")]
    Invalid(#[from] DraftError),
    #[error("roadmap not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Validate a draft and persist it with a fresh id.
///
/// # Errors
///
/// Returns [`RoadmapError::Invalid`] for an empty title and
/// [`RoadmapError::Storage`] if the store write fails.
pub async fn create_roadmap(state: &AppState, draft: NewRoadmap) -> Result<RoadmapRecord, RoadmapError> {
    draft.validate()?;
    let record = RoadmapRecord::new(draft.title, draft.description);
    let saved = state.store.save(record).await?;
    info!(id = %saved.id, store = state.store.kind(), "roadmap created");
    Ok(saved)
}

/// Fetch one roadmap. Ids that are not UUIDs cannot exist and are reported
/// as not found.
///
/// # Errors
///
/// Returns [`RoadmapError::NotFound`] if no record matches.
pub async fn get_roadmap(state: &AppState, id: &str) -> Result<RoadmapRecord, RoadmapError> {
    let Ok(uuid) = Uuid::parse_str(id) else {
        return Err(RoadmapError::NotFound(id.to_owned()));
    };
    state
        .store
        .find_by_id(uuid)
        .await?
        .ok_or_else(|| RoadmapError::NotFound(id.to_owned()))
}

/// List every roadmap in store order.
///
/// # Errors
///
/// Returns [`RoadmapError::Storage`] if the store read fails.
pub async fn list_roadmaps(state: &AppState) -> Result<Vec<RoadmapRecord>, RoadmapError> {
    Ok(state.store.find_all().await?)
}

#[cfg(test)]
#[path = "roadmap_test.rs"]
mod tests;
