//! Async wrapper around [`InventoryClient`] for use in async runtimes (Tokio, etc.).
//!
//! Requests run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], so a slow service suspends only the
//! awaiting task. Concurrent calls complete independently; there is no
//! ordering between them, and whichever result is rendered last wins.
//!
//! # Example
//!
//! ```no_run
//! use medicine_inventory_client::{AsyncInventoryClient, Presenter};
//! use medicine_inventory_client::ui::MedicinesContainer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncInventoryClient::builder()
//!         .base_url("http://localhost:8000")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let records = client.list_medicines().await.unwrap();
//!     let mut presenter = Presenter::new(Some(MedicinesContainer::new()));
//!     presenter.render(&records);
//!
//!     client.close().await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{InventoryError, Result};
use crate::models::{AveragePriceResult, FormSubmission, MedicineRecord};
use crate::transport::{HttpTransport, Transport};
use crate::InventoryClient;

// ---------------------------------------------------------------------------
// AsyncInventoryClientBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncInventoryClient`] over the real HTTP transport.
#[derive(Default)]
pub struct AsyncInventoryClientBuilder {
    config: ClientConfig,
}

impl AsyncInventoryClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client on the blocking pool; the underlying reqwest blocking
    /// client must not be created on an async worker thread.
    pub async fn build(self) -> Result<AsyncInventoryClient<HttpTransport>> {
        tokio::task::spawn_blocking(move || {
            let client = InventoryClient::builder().config(self.config).build()?;
            Ok(AsyncInventoryClient::new(client))
        })
        .await
        .map_err(|e| InventoryError::Task(e.to_string()))?
    }
}

// ---------------------------------------------------------------------------
// AsyncInventoryClient
// ---------------------------------------------------------------------------

pub struct AsyncInventoryClient<T: Transport = HttpTransport> {
    inner: Arc<InventoryClient<T>>,
}

impl<T: Transport> Clone for AsyncInventoryClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl AsyncInventoryClient<HttpTransport> {
    pub fn builder() -> AsyncInventoryClientBuilder {
        AsyncInventoryClientBuilder::default()
    }
}

impl<T> AsyncInventoryClient<T>
where
    T: Transport + Send + Sync + 'static,
{
    pub fn new(client: InventoryClient<T>) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&InventoryClient<T>) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let client = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| InventoryError::Task(e.to_string()))?
    }

    pub async fn list_medicines(&self) -> Result<Vec<MedicineRecord>> {
        self.run(|c| c.list_medicines()).await
    }

    pub async fn create(&self, form: FormSubmission) -> Result<()> {
        self.run(move |c| c.create(&form)).await
    }

    pub async fn update(&self, form: FormSubmission) -> Result<()> {
        self.run(move |c| c.update(&form)).await
    }

    pub async fn delete(&self, form: FormSubmission) -> Result<()> {
        self.run(move |c| c.delete(&form)).await
    }

    pub async fn average_price(&self) -> Result<AveragePriceResult> {
        self.run(|c| c.average_price()).await
    }

    /// Release the client on the blocking pool.
    ///
    /// Dropping the last handle of a reqwest blocking client on an async
    /// worker thread panics, so prefer this over a plain drop.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| InventoryError::Task(e.to_string()))
    }
}
