//! In-memory mount points the client renders into.
//!
//! Each stands in for one element of the page: the medicines container, a
//! status line, or a form's inputs. Owners hold them as `Option`s so a
//! missing element turns writes into no-ops.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    Success,
    Error,
}

impl StatusTone {
    pub fn class_name(self) -> &'static str {
        match self {
            StatusTone::Neutral => "status",
            StatusTone::Success => "status success",
            StatusTone::Error => "status error",
        }
    }
}

#[derive(Debug, Default)]
struct StatusLine {
    text: String,
    tone: StatusTone,
}

/// A status line: short text plus a tone.
///
/// Clones share one line, so a handle kept outside the page sees every write
/// made through the mounted one, including the pending text set while a
/// request is still in flight.
#[derive(Debug, Clone, Default)]
pub struct StatusRegion {
    line: Arc<Mutex<StatusLine>>,
}

impl StatusRegion {
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&self) -> MutexGuard<'_, StatusLine> {
        self.line.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, text: impl Into<String>, tone: StatusTone) {
        let mut line = self.line();
        line.text = text.into();
        line.tone = tone;
    }

    pub fn text(&self) -> String {
        self.line().text.clone()
    }

    pub fn tone(&self) -> StatusTone {
        self.line().tone
    }
}

/// Write to a status region if it is mounted.
pub(crate) fn set_status(region: Option<&StatusRegion>, text: &str, tone: StatusTone) {
    if let Some(region) = region {
        region.set(text, tone);
    }
}

/// The element the medicine cards are rendered into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MedicinesContainer {
    html: String,
}

impl MedicinesContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn clear(&mut self) {
        self.html.clear();
    }

    pub fn replace(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    pub fn append(&mut self, html: &str) {
        self.html.push_str(html);
    }
}

/// Raw text of a form's name and price inputs.
///
/// The delete form has no price input; its `price` is simply unused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInputs {
    pub name: String,
    pub price: String,
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, name: impl Into<String>, price: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self.price = price.into();
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.price.is_empty()
    }
}
