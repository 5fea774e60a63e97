//! Shared roadmap model and REST contract.
//!
//! This crate owns the wire representation used by `server`, `client` and
//! `cli`. The draft (`NewRoadmap`) and the persisted record (`Roadmap`) are
//! separate types: only the server assigns ids.
//!
//! ERROR HANDLING
//! ==============
//! Every client-side failure collapses into [`ApiError`]. Non-success HTTP
//! statuses are classified by [`ApiError::from_status`] so the browser and
//! native clients agree on what "not found" means.

use serde::{Deserialize, Serialize};

/// Collection endpoint for the roadmap resource.
pub const ROADMAPS_PATH: &str = "/api/roadmaps";

/// Router pattern for a single roadmap; `roadmap_path` fills in `{id}`.
pub const ROADMAP_ITEM_ROUTE: &str = "/api/roadmaps/{id}";

/// Message returned when a draft has no title.
pub const TITLE_REQUIRED: &str = "Title is required";

// =============================================================================
// MODEL
// =============================================================================

/// A roadmap as returned by the resource, including its server-assigned id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 creation timestamp, when the resource reports one.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A roadmap that has not been persisted yet. Carries no id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoadmap {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewRoadmap {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }

    /// Check the creation invariant: the title must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingTitle`] when `title` is empty.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        Ok(())
    }
}

/// Rejection reasons for a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,
}

/// JSON body of every non-success response: `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

// =============================================================================
// PATHS
// =============================================================================

/// Path of a single roadmap: `/api/roadmaps/{id}`.
#[must_use]
pub fn roadmap_path(id: &str) -> String {
    format!("{ROADMAPS_PATH}/{id}")
}

/// Join a base URL (possibly empty, for same-origin requests) with an API path.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a remote roadmap operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The resource answered 404 for the given path.
    #[error("not found: {0}")]
    NotFound(String),
    /// Any other non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No HTTP stack in this build (server-side rendering).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response for the request made to `path`.
    #[must_use]
    pub fn from_status(status: u16, path: &str, body: &str) -> Self {
        if status == 404 {
            return Self::NotFound(path.to_owned());
        }
        Self::Status { status, message: error_message(body) }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Pull the human-readable message out of an error body.
///
/// Falls back to the raw (trimmed) body when it is not an [`ErrorBody`].
#[must_use]
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_owned(),
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
