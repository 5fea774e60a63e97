//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the roadmap resource. The wire schema itself
//! lives in the shared `roadmaps` crate.

pub mod api;
