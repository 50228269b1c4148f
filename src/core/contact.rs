//! Contact form submission lifecycle.
//!
//! Tracks whether a submission is in flight and which status message is
//! showing. Every shown status gets a token; the auto-hide timer only
//! clears the status it was armed for, so a quick second submission keeps
//! its full display time.

use crate::config::messages;
use crate::core::error::ContactError;
use crate::models::{FormStatus, RelayResponse, SubmitMode};

/// Turn a relay acknowledgement into a result.
pub fn check_response(response: RelayResponse) -> Result<(), ContactError> {
    if response.success {
        Ok(())
    } else {
        Err(ContactError::Rejected(response.message))
    }
}

/// Status to show for a finished submission.
pub fn status_for(mode: &SubmitMode, result: &Result<(), ContactError>) -> FormStatus {
    match result {
        Ok(()) => FormStatus::Success(mode.success_message().to_string()),
        Err(_) => FormStatus::Error(messages::FAILURE.to_string()),
    }
}

/// State of one contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    status: FormStatus,
    generation: u64,
    in_flight: bool,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Mark a submission as started. Returns `false` if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Record the outcome and show its status.
    ///
    /// Returns the token to pass to [`ContactFormState::expire`].
    pub fn finish(&mut self, mode: &SubmitMode, result: &Result<(), ContactError>) -> u64 {
        self.in_flight = false;
        self.show(status_for(mode, result))
    }

    /// Show a status message. Returns its expiry token.
    pub fn show(&mut self, status: FormStatus) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.status = status;
        self.generation
    }

    /// Hide the message armed with `token`. Returns whether anything changed.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.generation || !self.status.is_visible() {
            return false;
        }
        self.status = FormStatus::Idle;
        true
    }
}
