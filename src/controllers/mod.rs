//! Form and query controllers.
//!
//! Each controller owns its status region and nothing else, so a failure in
//! one never touches another's state. A form submission moves through
//! `Idle -> Validating -> Submitting -> {Succeeded, Failed} -> Idle`;
//! validation failures return straight to `Idle` without a request.

pub mod average;
pub mod create;
pub mod delete;
pub mod update;

pub use average::{AverageController, AverageOutcome};
pub use create::CreateController;
pub use delete::DeleteController;
pub use update::UpdateController;

use tracing::{debug, warn};

use crate::error::{InventoryError, Result, ValidationError};
use crate::sync::SyncCycle;
use crate::transport::Transport;
use crate::ui::{set_status, FormInputs, StatusRegion, StatusTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The request succeeded and the list was re-fetched.
    Success,
    /// Input was rejected before any request was sent.
    Rejected(ValidationError),
    /// The request failed; the list was left alone.
    Failed(InventoryError),
    /// The form is not mounted, so there was nothing to submit.
    Unmounted,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

/// Status texts for one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMessages {
    pub pending: &'static str,
    pub invalid: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

/// State and status handling shared by the three form controllers.
#[derive(Debug)]
pub(crate) struct FormFlow {
    action: &'static str,
    messages: FormMessages,
    status: Option<StatusRegion>,
    state: SubmissionState,
}

impl FormFlow {
    pub(crate) fn new(
        action: &'static str,
        messages: FormMessages,
        status: Option<StatusRegion>,
    ) -> Self {
        Self {
            action,
            messages,
            status,
            state: SubmissionState::Idle,
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!(action = self.action, from = ?self.state, to = ?next, "submission state");
        self.state = next;
    }

    pub(crate) fn begin(&mut self) {
        set_status(self.status.as_ref(), self.messages.pending, StatusTone::Neutral);
        self.transition(SubmissionState::Validating);
    }

    pub(crate) fn reject(&mut self, err: ValidationError) -> SubmissionOutcome {
        let text = match &err {
            ValidationError::MissingField(_) => self.messages.invalid,
            ValidationError::Duplicate(_) => create::DUPLICATE_MESSAGE,
        };
        debug!(action = self.action, "rejected: {err}");
        set_status(self.status.as_ref(), text, StatusTone::Error);
        self.transition(SubmissionState::Idle);
        SubmissionOutcome::Rejected(err)
    }

    pub(crate) fn submitting(&mut self) {
        self.transition(SubmissionState::Submitting);
    }

    /// Settle a request: on success clear the form and re-fetch the list.
    pub(crate) fn finish<T: Transport>(
        &mut self,
        result: Result<()>,
        form: &mut FormInputs,
        sync: &mut SyncCycle<T>,
    ) -> SubmissionOutcome {
        let outcome = match result {
            Ok(()) => {
                self.transition(SubmissionState::Succeeded);
                set_status(self.status.as_ref(), self.messages.success, StatusTone::Success);
                form.reset();
                // Load failures are rendered and logged by the cycle itself.
                let _ = sync.refresh();
                SubmissionOutcome::Success
            }
            Err(e) => {
                self.transition(SubmissionState::Failed);
                warn!("Error {} medicine: {e}", self.action);
                set_status(self.status.as_ref(), self.messages.failure, StatusTone::Error);
                SubmissionOutcome::Failed(e)
            }
        };
        self.transition(SubmissionState::Idle);
        outcome
    }

    pub(crate) fn status(&self) -> Option<&StatusRegion> {
        self.status.as_ref()
    }

    pub(crate) fn state(&self) -> SubmissionState {
        self.state
    }
}

/// Trim both inputs and require a non-empty name, then a non-empty price.
pub(crate) fn require_name_and_price(
    form: &FormInputs,
) -> std::result::Result<(String, String), ValidationError> {
    let name = form.name.trim();
    let price = form.price.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if price.is_empty() {
        return Err(ValidationError::MissingField("price"));
    }
    Ok((name.to_string(), price.to_string()))
}
