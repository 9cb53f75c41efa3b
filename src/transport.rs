//! HTTP transport for the inventory service.
//!
//! The [`Transport`] trait is the seam between the client and the network:
//! [`HttpTransport`] issues real requests through `reqwest`, and tests
//! substitute a recording double. One attempt per call, no retries.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::{self, ClientConfig, Endpoint};
use crate::error::Result;
use crate::models::FormSubmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Status code and undecoded body of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can deliver a single request to the service.
pub trait Transport {
    fn request(
        &self,
        endpoint: Endpoint,
        method: Method,
        form: Option<&FormSubmission>,
    ) -> Result<RawResponse>;
}

// ---------------------------------------------------------------------------
// HttpTransport
// ---------------------------------------------------------------------------

pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // `None` disables the blocking client's default 30s timeout.
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn request(
        &self,
        endpoint: Endpoint,
        method: Method,
        form: Option<&FormSubmission>,
    ) -> Result<RawResponse> {
        let url = config::endpoint_url(&self.base_url, endpoint.path());
        debug!(method = method.as_str(), %url, "sending request");

        let mut req = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(fields) = form {
            req = req.form(fields);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        debug!(status, %url, "received response");
        Ok(RawResponse { status, body })
    }
}

// ---------------------------------------------------------------------------
// Outcome: uniform three-way classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ok(Value),
    HttpFailure(u16),
    ApplicationFailure(String),
}

/// How much of a successful response the caller relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Only the status code matters; an undecodable body becomes `null`.
    Status,
    /// The body must decode as JSON.
    Json,
    /// The body must decode as JSON and carry no truthy `error` field.
    JsonWithoutError,
}

/// Classify a raw response.
///
/// Non-2xx is an HTTP failure whatever the body says. Decode failures are
/// returned as `Err` for the JSON expectations.
pub fn classify(resp: &RawResponse, expect: Expect) -> Result<Outcome> {
    if !resp.is_success() {
        return Ok(Outcome::HttpFailure(resp.status));
    }
    let data: Value = match expect {
        Expect::Status => serde_json::from_str(&resp.body).unwrap_or(Value::Null),
        Expect::Json | Expect::JsonWithoutError => serde_json::from_str(&resp.body)?,
    };
    if expect == Expect::JsonWithoutError {
        if let Some(message) = application_error(&data) {
            return Ok(Outcome::ApplicationFailure(message));
        }
    }
    Ok(Outcome::Ok(data))
}

/// The service's `error` field, if it holds a truthy value.
pub fn application_error(data: &Value) -> Option<String> {
    match data.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
