use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Price: the three shapes a service price can take
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    /// A JSON number.
    Amount(f64),
    /// `null` or no `price` field at all.
    Missing,
    /// Any other JSON type (string, bool, object, array).
    Invalid,
}

impl Price {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Price::Missing,
            Some(Value::Number(n)) => n.as_f64().map(Price::Amount).unwrap_or(Price::Invalid),
            Some(_) => Price::Invalid,
        }
    }
}

// ---------------------------------------------------------------------------
// MedicineRecord: one entry of the `/medicines` list
// ---------------------------------------------------------------------------

pub const UNNAMED_MEDICINE: &str = "unnamed medicine";

#[derive(Debug, Clone, PartialEq)]
pub struct MedicineRecord {
    pub name: String,
    pub price: Price,
}

impl MedicineRecord {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Decode a list element leniently: a non-string name becomes empty and a
    /// non-object element becomes an unnamed record with no price.
    pub fn from_value(value: &Value) -> Self {
        let name = value
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        let price = Price::from_value(value.get("price"));
        Self { name, price }
    }

    /// The name as shown on the card, with the placeholder for blank names.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNNAMED_MEDICINE
        } else {
            &self.name
        }
    }
}

impl<'de> Deserialize<'de> for MedicineRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

// ---------------------------------------------------------------------------
// The `/medicines` response envelope
// ---------------------------------------------------------------------------

/// Extract the records from a `/medicines` body.
///
/// A missing or non-array `medicines` field yields an empty list. Only a
/// `null` body is rejected, since there is nothing to look the field up in.
pub fn medicines_from_body(body: &Value) -> Result<Vec<MedicineRecord>, serde_json::Error> {
    match body {
        Value::Null => Err(serde::de::Error::custom("medicines response body is null")),
        _ => Ok(match body.get("medicines") {
            Some(Value::Array(items)) => items.iter().map(MedicineRecord::from_value).collect(),
            _ => Vec::new(),
        }),
    }
}
