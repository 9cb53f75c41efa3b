use crate::controllers::{FormFlow, FormMessages, SubmissionOutcome, SubmissionState};
use crate::error::ValidationError;
use crate::models::FormSubmission;
use crate::sync::SyncCycle;
use crate::transport::Transport;
use crate::ui::{FormInputs, StatusRegion};

pub const MESSAGES: FormMessages = FormMessages {
    pending: "Deleting...",
    invalid: "Please enter a medicine name.",
    success: "Medicine deleted successfully!",
    failure: "Failed to delete medicine (check the name).",
};

/// Controller for the delete form. Only the name is sent.
#[derive(Debug)]
pub struct DeleteController {
    flow: FormFlow,
}

impl DeleteController {
    pub fn new(status: Option<StatusRegion>) -> Self {
        Self {
            flow: FormFlow::new("deleting", MESSAGES, status),
        }
    }

    pub fn submit<T: Transport>(
        &mut self,
        form: &mut FormInputs,
        sync: &mut SyncCycle<T>,
    ) -> SubmissionOutcome {
        self.flow.begin();

        let name = form.name.trim().to_string();
        if name.is_empty() {
            return self.flow.reject(ValidationError::MissingField("name"));
        }

        self.flow.submitting();
        let result = sync.client.delete(&FormSubmission::named(name));
        self.flow.finish(result, form, sync)
    }

    pub fn status(&self) -> Option<&StatusRegion> {
        self.flow.status()
    }

    pub fn state(&self) -> SubmissionState {
        self.flow.state()
    }
}
