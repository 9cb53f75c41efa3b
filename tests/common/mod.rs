//! Shared test fixtures for the inventory client integration tests.
//!
//! Provides a `MockTransport` that records every request and replays queued
//! canned responses, plus helpers to build a client and a fully mounted page
//! around it. Request hooks let a test look at the page while a request is
//! still in flight.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use medicine_inventory_client::models::FormSubmission;
use medicine_inventory_client::ui::{StatusRegion, StatusTone};
use medicine_inventory_client::{
    Endpoint, InventoryClient, InventoryError, InventoryPage, Method, PageMounts, RawResponse,
    Result, Transport,
};

/// One request as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: Endpoint,
    pub method: Method,
    pub form: Option<FormSubmission>,
}

enum Reply {
    Response(RawResponse),
    Unreachable,
}

type RequestHook = Box<dyn Fn(Endpoint) + Send>;

/// A transport that answers from a queue and remembers what it was asked.
///
/// Running out of queued replies is treated as a refused connection.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
    hooks: Mutex<Vec<RequestHook>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.reply_raw(status, body.to_string())
    }

    pub fn reply_raw(&self, status: u16, body: impl Into<String>) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Response(RawResponse::new(status, body)));
        self
    }

    pub fn fail_connection(&self) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Unreachable);
        self
    }

    /// Run `hook` inside every request, before the reply is returned.
    pub fn on_request(&self, hook: impl Fn(Endpoint) + Send + 'static) -> &Self {
        self.hooks.lock().unwrap().push(Box::new(hook));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn count_for(&self, endpoint: Endpoint) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.endpoint == endpoint)
            .count()
    }
}

impl Transport for MockTransport {
    fn request(
        &self,
        endpoint: Endpoint,
        method: Method,
        form: Option<&FormSubmission>,
    ) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            endpoint,
            method,
            form: form.cloned(),
        });
        for hook in self.hooks.lock().unwrap().iter() {
            hook(endpoint);
        }
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Response(resp)) => Ok(resp),
            Some(Reply::Unreachable) | None => Err(InventoryError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

pub fn client(transport: MockTransport) -> InventoryClient<MockTransport> {
    InventoryClient::with_transport(transport, "http://mock.local")
}

/// A page with every mount point present, over a mock transport.
pub fn page(transport: MockTransport) -> InventoryPage<MockTransport> {
    InventoryPage::new(client(transport), PageMounts::all())
}

/// A `/medicines` body with the given name/price pairs.
pub fn medicines_body(items: &[(&str, f64)]) -> serde_json::Value {
    let medicines: Vec<serde_json::Value> = items
        .iter()
        .map(|(name, price)| serde_json::json!({ "name": name, "price": price }))
        .collect();
    serde_json::json!({ "medicines": medicines })
}

/// A page that has already loaded the given medicines. The load request is
/// included in the transport's history.
pub fn loaded_page(items: &[(&str, f64)]) -> InventoryPage<MockTransport> {
    let transport = MockTransport::new();
    transport.reply(200, medicines_body(items));
    let mut page = page(transport);
    page.load().unwrap();
    page
}

/// What a status region showed each time `endpoint` was requested.
pub type StatusLog = Arc<Mutex<Vec<(String, StatusTone)>>>;

pub fn watch_status(
    transport: &MockTransport,
    endpoint: Endpoint,
    status: &StatusRegion,
) -> StatusLog {
    let log = StatusLog::default();
    let seen = Arc::clone(&log);
    let status = status.clone();
    transport.on_request(move |hit| {
        if hit == endpoint {
            seen.lock().unwrap().push((status.text(), status.tone()));
        }
    });
    log
}

pub fn transport_of(page: &InventoryPage<MockTransport>) -> &MockTransport {
    page.client().transport()
}
