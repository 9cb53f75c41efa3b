use serde::Serialize;

/// Form-encoded fields for one create, update, or delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl FormSubmission {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
        }
    }

    pub fn priced(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: Some(price.into()),
        }
    }
}
