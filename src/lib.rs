//! Client for a medicine inventory service.
//!
//! Fetches the medicine list, renders it as HTML cards, and drives the
//! create/update/delete forms and the average-price query against the
//! service's REST endpoints.
//!
//! # Quick start
//!
//! ```no_run
//! use medicine_inventory_client::{InventoryClient, InventoryPage, PageMounts};
//!
//! # fn main() -> medicine_inventory_client::Result<()> {
//! let client = InventoryClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let mut page = InventoryPage::new(client, PageMounts::all());
//! page.load()?;
//!
//! if let Some(form) = page.create_form_mut() {
//!     form.fill("Aspirin", "4.99");
//! }
//! let outcome = page.submit_create();
//! println!("{:?}", page.create_status().map(|s| s.text()));
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod page;
pub mod presenter;
pub mod sync;
pub mod transport;
pub mod ui;

#[cfg(feature = "async")]
pub use async_client::AsyncInventoryClient;
pub use config::{ClientConfig, Endpoint};
pub use error::{InventoryError, Result, ValidationError};
pub use page::{InventoryPage, PageMounts};
pub use presenter::Presenter;
pub use sync::SyncCycle;
pub use transport::{Expect, HttpTransport, Method, Outcome, RawResponse, Transport};

use std::fmt;
use std::time::Duration;

use models::{AveragePriceResult, FormSubmission, MedicineRecord};

// ---------------------------------------------------------------------------
// InventoryClientBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`InventoryClient`] over the real HTTP transport.
///
/// Use [`InventoryClient::builder()`] to obtain one.
#[derive(Default)]
pub struct InventoryClientBuilder {
    config: ClientConfig,
}

impl InventoryClientBuilder {
    /// Set the service base address. Defaults to `http://localhost:8000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set a request timeout. By default requests never time out.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Replace all settings, e.g. with [`ClientConfig::from_env()`].
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<InventoryClient<HttpTransport>> {
        let transport = HttpTransport::new(&self.config)?;
        Ok(InventoryClient {
            transport,
            base_url: self.config.base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// InventoryClient
// ---------------------------------------------------------------------------

/// Typed operations over the five service endpoints.
///
/// Every operation issues exactly one request and maps the response through
/// [`transport::classify`], so HTTP failures surface as
/// [`InventoryError::Status`] and service-reported errors as
/// [`InventoryError::Application`].
pub struct InventoryClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
}

impl InventoryClient<HttpTransport> {
    pub fn builder() -> InventoryClientBuilder {
        InventoryClientBuilder::default()
    }
}

impl<T: Transport> InventoryClient<T> {
    /// Wrap an arbitrary transport, e.g. a test double.
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and classify the response.
    pub fn call(
        &self,
        endpoint: Endpoint,
        method: Method,
        form: Option<&FormSubmission>,
        expect: Expect,
    ) -> Result<Outcome> {
        let resp = self.transport.request(endpoint, method, form)?;
        transport::classify(&resp, expect)
    }

    fn call_ok(
        &self,
        endpoint: Endpoint,
        method: Method,
        form: Option<&FormSubmission>,
        expect: Expect,
    ) -> Result<serde_json::Value> {
        match self.call(endpoint, method, form, expect)? {
            Outcome::Ok(data) => Ok(data),
            Outcome::HttpFailure(status) => Err(InventoryError::Status(status)),
            Outcome::ApplicationFailure(message) => Err(InventoryError::Application(message)),
        }
    }

    /// `GET /medicines`.
    pub fn list_medicines(&self) -> Result<Vec<MedicineRecord>> {
        let data = self.call_ok(Endpoint::Medicines, Method::Get, None, Expect::Json)?;
        Ok(models::medicines_from_body(&data)?)
    }

    /// `POST /create`. Only the status code is checked.
    pub fn create(&self, form: &FormSubmission) -> Result<()> {
        self.call_ok(Endpoint::Create, Method::Post, Some(form), Expect::Status)?;
        Ok(())
    }

    /// `POST /update`.
    pub fn update(&self, form: &FormSubmission) -> Result<()> {
        self.call_ok(Endpoint::Update, Method::Post, Some(form), Expect::JsonWithoutError)?;
        Ok(())
    }

    /// `DELETE /delete`.
    pub fn delete(&self, form: &FormSubmission) -> Result<()> {
        self.call_ok(Endpoint::Delete, Method::Delete, Some(form), Expect::JsonWithoutError)?;
        Ok(())
    }

    /// `GET /medicines-average-price`.
    pub fn average_price(&self) -> Result<AveragePriceResult> {
        let data = self.call_ok(Endpoint::AveragePrice, Method::Get, None, Expect::Json)?;
        Ok(serde_json::from_value(data)?)
    }
}

impl<T: Transport> fmt::Display for InventoryClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InventoryClient(base_url={})", self.base_url)
    }
}
