use std::env;
use std::time::Duration;

use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const BASE_URL_ENV: &str = "MEDICINE_INVENTORY_URL";

/// The five service endpoints the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Medicines,
    Create,
    Update,
    Delete,
    AveragePrice,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Medicines => "/medicines",
            Endpoint::Create => "/create",
            Endpoint::Update => "/update",
            Endpoint::Delete => "/delete",
            Endpoint::AveragePrice => "/medicines-average-price",
        }
    }
}

/// Process-wide client settings, resolved once at startup and handed to the
/// client builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` means requests may wait indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Read the base address from `MEDICINE_INVENTORY_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url = match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
            Ok(_) => {
                warn!("{BASE_URL_ENV} is empty, using default: {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL.to_string()
            }
            Err(_) => {
                info!("{BASE_URL_ENV} not set, using default: {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL.to_string()
            }
        };
        Self {
            base_url,
            timeout: None,
        }
    }
}

/// Join a base address and an endpoint path, ignoring a trailing `/` on the base.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
