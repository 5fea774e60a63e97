//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and storage orchestration so route
//! handlers can stay focused on protocol translation.

pub mod roadmap;
