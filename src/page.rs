//! The assembled page: sync cycle, controllers, and form inputs.
//!
//! [`InventoryPage`] owns every mount point. The presenter writes only the
//! medicines container and each controller writes only its own status region,
//! so the write sets stay disjoint.

use crate::controllers::{
    AverageController, AverageOutcome, CreateController, DeleteController, SubmissionOutcome,
    UpdateController,
};
use crate::error::Result;
use crate::presenter::Presenter;
use crate::sync::SyncCycle;
use crate::transport::Transport;
use crate::ui::{FormInputs, MedicinesContainer, StatusRegion};
use crate::InventoryClient;

/// Which page elements exist. A `None` (or `false`) element is tolerated:
/// writes to it are skipped, and a missing form or trigger ignores submits.
#[derive(Debug, Default)]
pub struct PageMounts {
    pub container: Option<MedicinesContainer>,
    pub create_form: Option<FormInputs>,
    pub create_status: Option<StatusRegion>,
    pub update_form: Option<FormInputs>,
    pub update_status: Option<StatusRegion>,
    pub delete_form: Option<FormInputs>,
    pub delete_status: Option<StatusRegion>,
    pub average_trigger: bool,
    pub average_result: Option<StatusRegion>,
}

impl PageMounts {
    /// Every element present and empty.
    pub fn all() -> Self {
        Self {
            container: Some(MedicinesContainer::new()),
            create_form: Some(FormInputs::new()),
            create_status: Some(StatusRegion::new()),
            update_form: Some(FormInputs::new()),
            update_status: Some(StatusRegion::new()),
            delete_form: Some(FormInputs::new()),
            delete_status: Some(StatusRegion::new()),
            average_trigger: true,
            average_result: Some(StatusRegion::new()),
        }
    }

    /// No elements at all.
    pub fn none() -> Self {
        Self::default()
    }
}

pub struct InventoryPage<T: Transport> {
    sync: SyncCycle<T>,
    create: CreateController,
    create_form: Option<FormInputs>,
    update: UpdateController,
    update_form: Option<FormInputs>,
    delete: DeleteController,
    delete_form: Option<FormInputs>,
    average: AverageController,
    average_trigger: bool,
}

impl<T: Transport> InventoryPage<T> {
    pub fn new(client: InventoryClient<T>, mounts: PageMounts) -> Self {
        Self {
            sync: SyncCycle::new(client, Presenter::new(mounts.container)),
            create: CreateController::new(mounts.create_status),
            create_form: mounts.create_form,
            update: UpdateController::new(mounts.update_status),
            update_form: mounts.update_form,
            delete: DeleteController::new(mounts.delete_status),
            delete_form: mounts.delete_form,
            average: AverageController::new(mounts.average_result),
            average_trigger: mounts.average_trigger,
        }
    }

    // -- Actions -----------------------------------------------------------

    /// Initial fetch and render. Returns the number of records on success.
    pub fn load(&mut self) -> Result<usize> {
        self.sync.refresh()
    }

    pub fn submit_create(&mut self) -> SubmissionOutcome {
        match self.create_form.as_mut() {
            Some(form) => self.create.submit(form, &mut self.sync),
            None => SubmissionOutcome::Unmounted,
        }
    }

    pub fn submit_update(&mut self) -> SubmissionOutcome {
        match self.update_form.as_mut() {
            Some(form) => self.update.submit(form, &mut self.sync),
            None => SubmissionOutcome::Unmounted,
        }
    }

    pub fn submit_delete(&mut self) -> SubmissionOutcome {
        match self.delete_form.as_mut() {
            Some(form) => self.delete.submit(form, &mut self.sync),
            None => SubmissionOutcome::Unmounted,
        }
    }

    pub fn trigger_average(&mut self) -> AverageOutcome {
        if !self.average_trigger {
            return AverageOutcome::Unmounted;
        }
        self.average.trigger(&self.sync.client)
    }

    // -- Mount point access ------------------------------------------------

    pub fn create_form_mut(&mut self) -> Option<&mut FormInputs> {
        self.create_form.as_mut()
    }

    pub fn update_form_mut(&mut self) -> Option<&mut FormInputs> {
        self.update_form.as_mut()
    }

    pub fn delete_form_mut(&mut self) -> Option<&mut FormInputs> {
        self.delete_form.as_mut()
    }

    pub fn create_form(&self) -> Option<&FormInputs> {
        self.create_form.as_ref()
    }

    pub fn update_form(&self) -> Option<&FormInputs> {
        self.update_form.as_ref()
    }

    pub fn delete_form(&self) -> Option<&FormInputs> {
        self.delete_form.as_ref()
    }

    pub fn create_status(&self) -> Option<&StatusRegion> {
        self.create.status()
    }

    pub fn update_status(&self) -> Option<&StatusRegion> {
        self.update.status()
    }

    pub fn delete_status(&self) -> Option<&StatusRegion> {
        self.delete.status()
    }

    pub fn average_result(&self) -> Option<&StatusRegion> {
        self.average.result()
    }

    /// Rendered medicines markup, if the container is mounted.
    pub fn medicines_html(&self) -> Option<&str> {
        self.sync.presenter.html()
    }

    pub fn presenter(&self) -> &Presenter {
        &self.sync.presenter
    }

    pub fn client(&self) -> &InventoryClient<T> {
        &self.sync.client
    }
}
