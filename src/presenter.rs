//! Renders medicine records as HTML cards.
//!
//! The presenter is the only writer of the medicines container. It also keeps
//! the records of the last fetch as a snapshot, which the create form reads
//! for its duplicate check.

use serde_json::Value;

use crate::models::{MedicineRecord, Price};
use crate::ui::MedicinesContainer;

pub const EMPTY_PLACEHOLDER: &str = "<p>No medicines found.</p>";
pub const LOAD_FAILURE: &str =
    r#"<p class="status error">Failed to load medicines. Please try again later.</p>"#;

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format an amount as pounds with two decimals.
pub fn format_currency(amount: f64) -> String {
    format!("£{amount:.2}")
}

pub fn price_text(price: &Price) -> String {
    match price {
        Price::Amount(amount) => format_currency(*amount),
        Price::Missing => "Price not available".to_string(),
        Price::Invalid => "Invalid price".to_string(),
    }
}

/// Markup for one card. `position` is 1-based.
pub fn card_html(record: &MedicineRecord, position: usize) -> String {
    format!(
        concat!(
            "<article class=\"medicine-card card\">\n",
            "<div class=\"med-header\">\n",
            "<h3>{name}</h3>\n",
            "<span class=\"pill pill-index\">#{position}</span>\n",
            "</div>\n",
            "<p class=\"med-price\"><strong>Price:</strong> {price}</p>\n",
            "</article>\n",
        ),
        name = escape_html(record.display_name()),
        position = position,
        price = escape_html(&price_text(&record.price)),
    )
}

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct Presenter {
    container: Option<MedicinesContainer>,
    snapshot: Vec<MedicineRecord>,
}

impl Presenter {
    pub fn new(container: Option<MedicinesContainer>) -> Self {
        Self {
            container,
            snapshot: Vec::new(),
        }
    }

    /// Replace the container content with one card per record, in order.
    pub fn render(&mut self, records: &[MedicineRecord]) {
        self.snapshot = records.to_vec();
        let Some(container) = self.container.as_mut() else {
            return;
        };

        container.clear();
        if records.is_empty() {
            container.replace(EMPTY_PLACEHOLDER);
            return;
        }
        for (index, record) in records.iter().enumerate() {
            container.append(&card_html(record, index + 1));
        }
    }

    /// Render an undecoded list. Anything but a JSON array renders the
    /// empty placeholder.
    pub fn render_value(&mut self, value: &Value) {
        let records: Vec<MedicineRecord> = match value {
            Value::Array(items) => items.iter().map(MedicineRecord::from_value).collect(),
            _ => Vec::new(),
        };
        self.render(&records);
    }

    /// Show the load-failure message. The snapshot is emptied along with the
    /// cards.
    pub fn render_failure(&mut self) {
        self.snapshot.clear();
        if let Some(container) = self.container.as_mut() {
            container.replace(LOAD_FAILURE);
        }
    }

    /// Case-insensitive, whitespace-trimmed match against the displayed names
    /// of the last render.
    pub fn contains_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.snapshot
            .iter()
            .any(|record| record.display_name().trim().to_lowercase() == wanted)
    }

    pub fn snapshot(&self) -> &[MedicineRecord] {
        &self.snapshot
    }

    pub fn container(&self) -> Option<&MedicinesContainer> {
        self.container.as_ref()
    }

    /// The rendered markup, or `None` when no container is mounted.
    pub fn html(&self) -> Option<&str> {
        self.container.as_ref().map(|c| c.html())
    }
}
