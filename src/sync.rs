//! The fetch-and-render cycle.

use tracing::{debug, error};

use crate::error::Result;
use crate::presenter::Presenter;
use crate::transport::Transport;
use crate::InventoryClient;

/// Pairs the client with the presenter so every refresh is a full re-fetch
/// followed by a full re-render.
pub struct SyncCycle<T: Transport> {
    pub client: InventoryClient<T>,
    pub presenter: Presenter,
}

impl<T: Transport> SyncCycle<T> {
    pub fn new(client: InventoryClient<T>, presenter: Presenter) -> Self {
        Self { client, presenter }
    }

    /// Fetch `/medicines` and render the result.
    ///
    /// On failure the container shows the load-failure message and the error
    /// is returned for the caller to inspect; it is never fatal.
    pub fn refresh(&mut self) -> Result<usize> {
        match self.client.list_medicines() {
            Ok(records) => {
                debug!(count = records.len(), "rendering medicines");
                self.presenter.render(&records);
                Ok(records.len())
            }
            Err(e) => {
                error!("Error fetching medicines: {e}");
                self.presenter.render_failure();
                Err(e)
            }
        }
    }
}
