//! Creation-form state: the draft being typed and the submit lifecycle.
//!
//! DESIGN
//! ======
//! `Idle --save--> Submitting --ok--> Idle (fields cleared)`
//! `Submitting --err--> Failed (fields kept)`; `Failed` accepts save again.
//!
//! The component drives transitions through `begin_submit` and
//! `finish_submit`, so the rules are testable without a browser.
//! `finish_submit` hands back the created record; the component publishes
//! exactly that on the creation feed.

#[cfg(test)]
#[path = "create_form_test.rs"]
mod create_form_test;

use roadmaps::{ApiError, NewRoadmap, Roadmap};

/// Where the form is in its submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    /// Last create failed; holds the message shown to the user.
    Failed(String),
}

/// Transient form state, exclusively owned by the creation view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateFormState {
    pub title: String,
    pub description: String,
    pub phase: SubmitPhase,
    /// Set by a successful create, cleared by the next edit or save.
    pub saved: bool,
}

impl CreateFormState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.saved = false;
        self.dismiss_error();
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.saved = false;
        self.dismiss_error();
    }

    /// Start a save. Returns the draft to send, or `None` when the title is
    /// empty or a request is already in flight (no request must be issued).
    pub fn begin_submit(&mut self) -> Option<NewRoadmap> {
        if self.is_submitting() {
            return None;
        }
        let draft = NewRoadmap::new(self.title.clone(), self.description.clone());
        draft.validate().ok()?;
        self.phase = SubmitPhase::Submitting;
        self.saved = false;
        Some(draft)
    }

    /// Apply the outcome of the create call started by `begin_submit`.
    /// Returns the roadmap to publish, which is `Some` only for a success
    /// that answers a pending submit.
    pub fn finish_submit(&mut self, outcome: &Result<Roadmap, ApiError>) -> Option<Roadmap> {
        if !self.is_submitting() {
            return None;
        }
        match outcome {
            Ok(created) => {
                self.title.clear();
                self.description.clear();
                self.phase = SubmitPhase::Idle;
                self.saved = true;
                Some(created.clone())
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed(err.to_string());
                None
            }
        }
    }

    /// Leave `Failed` without retrying.
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, SubmitPhase::Failed(_)) {
            self.phase = SubmitPhase::Idle;
        }
    }
}
