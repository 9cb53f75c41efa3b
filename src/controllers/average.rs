use std::fmt;

use tracing::warn;

use crate::error::InventoryError;
use crate::models::AveragePriceResult;
use crate::presenter::format_currency;
use crate::transport::Transport;
use crate::ui::{set_status, StatusRegion, StatusTone};
use crate::InventoryClient;

pub const PENDING_MESSAGE: &str = "Calculating average...!";
pub const NO_DATA_MESSAGE: &str = "No valid prices available.";
pub const FAILURE_MESSAGE: &str = "Failed to fetch average price.";

#[derive(Debug)]
pub enum AverageOutcome {
    Computed(AveragePriceResult),
    /// The service had no priced medicines; carries the text shown.
    NoData(String),
    Failed(InventoryError),
    /// No trigger is mounted.
    Unmounted,
}

impl AverageOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AverageOutcome::Computed(_))
    }
}

/// `Average price: £12.50 (based on 4 medicines)`
pub fn average_text(average: f64, count: impl fmt::Display) -> String {
    format!(
        "Average price: {} (based on {} medicines)",
        format_currency(average),
        count
    )
}

/// Controller for the average-price trigger and its result region.
#[derive(Debug)]
pub struct AverageController {
    result: Option<StatusRegion>,
}

impl AverageController {
    pub fn new(result: Option<StatusRegion>) -> Self {
        Self { result }
    }

    pub fn trigger<T: Transport>(&mut self, client: &InventoryClient<T>) -> AverageOutcome {
        set_status(self.result.as_ref(), PENDING_MESSAGE, StatusTone::Neutral);

        match client.average_price() {
            Ok(res) => match res.average {
                Some(average) => {
                    let text = average_text(average, res.count_text());
                    set_status(self.result.as_ref(), &text, StatusTone::Success);
                    AverageOutcome::Computed(res)
                }
                None => {
                    let text = res
                        .message_text()
                        .unwrap_or_else(|| NO_DATA_MESSAGE.to_string());
                    set_status(self.result.as_ref(), &text, StatusTone::Error);
                    AverageOutcome::NoData(text)
                }
            },
            Err(e) => {
                warn!("Error fetching average price: {e}");
                set_status(self.result.as_ref(), FAILURE_MESSAGE, StatusTone::Error);
                AverageOutcome::Failed(e)
            }
        }
    }

    pub fn result(&self) -> Option<&StatusRegion> {
        self.result.as_ref()
    }
}
