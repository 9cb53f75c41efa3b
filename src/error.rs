/// Client-side input checks that stop a submission before any request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("medicine already exists: {0}")]
    Duplicate(String),
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Service error: {0}")]
    Application(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Task join error: {0}")]
    Task(String),
}

impl InventoryError {
    /// True for network-level failures where no response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, InventoryError::Http(_) | InventoryError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
