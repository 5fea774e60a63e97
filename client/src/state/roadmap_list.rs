//! Listing state: the materialized roadmap collection and its load flag.
//!
//! DESIGN
//! ======
//! Every load replaces the whole collection; records are never merged.
//! Loads are numbered so a slow response cannot overwrite a newer one when
//! a refresh is requested while another is still in flight.
//!
//! The view reports every creation-feed revision through `observe_feed`;
//! the first revision seen and each later change start a load.

#[cfg(test)]
#[path = "roadmap_list_test.rs"]
mod roadmap_list_test;

use roadmaps::{ApiError, Roadmap};

/// Collection state, exclusively owned by the listing view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoadmapListState {
    pub items: Vec<Roadmap>,
    pub loading: bool,
    /// Message from the last failed load, cleared by the next load.
    pub error: Option<String>,
    latest_load: u64,
    seen_revision: Option<u64>,
}

impl RoadmapListState {
    /// Mark a load as started. Returns the ticket to pass to `finish_load`.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_load += 1;
        self.loading = true;
        self.error = None;
        self.latest_load
    }

    /// Apply a load outcome. Outcomes for superseded tickets are dropped;
    /// returns whether this one was applied.
    pub fn finish_load(&mut self, ticket: u64, outcome: Result<Vec<Roadmap>, ApiError>) -> bool {
        if ticket != self.latest_load {
            return false;
        }
        match outcome {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
        true
    }

    /// Note the current creation-feed revision. Returns a load ticket on
    /// first activation and whenever the revision moved since the last call.
    pub fn observe_feed(&mut self, revision: u64) -> Option<u64> {
        if self.seen_revision == Some(revision) {
            return None;
        }
        self.seen_revision = Some(revision);
        Some(self.begin_load())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
