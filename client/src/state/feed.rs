//! Creation feed shared by the creation and listing views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The creation view publishes every roadmap it creates; the listing view
//! watches the revision and reloads. This is the only state the two views
//! share, and only the creation view writes it.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use roadmaps::Roadmap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreatedFeed {
    revision: u64,
    last: Option<Roadmap>,
}

impl CreatedFeed {
    pub fn publish(&mut self, roadmap: Roadmap) {
        self.revision += 1;
        self.last = Some(roadmap);
    }

    /// Number of roadmaps published so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn last(&self) -> Option<&Roadmap> {
        self.last.as_ref()
    }
}
