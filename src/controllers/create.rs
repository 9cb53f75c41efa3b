use crate::controllers::{
    require_name_and_price, FormFlow, FormMessages, SubmissionOutcome, SubmissionState,
};
use crate::error::ValidationError;
use crate::models::FormSubmission;
use crate::sync::SyncCycle;
use crate::transport::Transport;
use crate::ui::{FormInputs, StatusRegion};

pub const MESSAGES: FormMessages = FormMessages {
    pending: "Creating...",
    invalid: "Please enter both name and price",
    success: "Medicine created successfully!",
    failure: "Failed to create medicine.",
};

pub const DUPLICATE_MESSAGE: &str = "This medicine already exists!";

/// Controller for the create form.
///
/// Before submitting it checks the presenter's snapshot for a medicine with
/// the same name. The check only sees the last render, so two clients can
/// still create the same name concurrently.
#[derive(Debug)]
pub struct CreateController {
    flow: FormFlow,
}

impl CreateController {
    pub fn new(status: Option<StatusRegion>) -> Self {
        Self {
            flow: FormFlow::new("creating", MESSAGES, status),
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
        if sync.presenter.contains_name(&name) {
            return self.flow.reject(ValidationError::Duplicate(name));
        }

        self.flow.submitting();
        let result = sync.client.create(&FormSubmission::priced(name, price));
        self.flow.finish(result, form, sync)
    }

    pub fn status(&self) -> Option<&StatusRegion> {
        self.flow.status()
    }

    pub fn state(&self) -> SubmissionState {
        self.flow.state()
    }
}
