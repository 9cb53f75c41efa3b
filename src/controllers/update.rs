use crate::controllers::{
    require_name_and_price, FormFlow, FormMessages, SubmissionOutcome, SubmissionState,
};
use crate::models::FormSubmission;
use crate::sync::SyncCycle;
use crate::transport::Transport;
use crate::ui::{FormInputs, StatusRegion};

pub const MESSAGES: FormMessages = FormMessages {
    pending: "Updating...",
    invalid: "Please enter both name and new price.",
    success: "Medicine updated successfully!",
    failure: "Failed to update medicine (check the name).",
};

/// Controller for the update form. The name is the lookup key.
#[derive(Debug)]
pub struct UpdateController {
    flow: FormFlow,
}

impl UpdateController {
    pub fn new(status: Option<StatusRegion>) -> Self {
        Self {
            flow: FormFlow::new("updating", MESSAGES, status),
        }
    }

    pub fn submit<T: Transport>(
        &mut self,
        form: &mut FormInputs,
        sync: &mut SyncCycle<T>,
    ) -> SubmissionOutcome {
        self.flow.begin();

        let (name, price) = match require_name_and_price(form) {
            Ok(fields) => fields,
            Err(e) => return self.flow.reject(e),
        };

        self.flow.submitting();
        let result = sync.client.update(&FormSubmission::priced(name, price));
        self.flow.finish(result, form, sync)
    }

    pub fn status(&self) -> Option<&StatusRegion> {
        self.flow.status()
    }

    pub fn state(&self) -> SubmissionState {
        self.flow.state()
    }
}
