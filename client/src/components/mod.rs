//! UI components for the roadmap page.
//!
//! ARCHITECTURE
//! ============
//! The creation form and the listing take the `RoadmapClient` and the
//! `CreatedFeed` signal as props; neither reads shared state from context.

pub mod roadmap_create;
pub mod roadmap_list;
