use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ---------------------------------------------------------------------------
// AveragePriceResult: `/medicines-average-price` response
// ---------------------------------------------------------------------------

/// Only `average_price` is typed strictly. `count` and `message` are shown
/// as text whatever JSON they hold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AveragePriceResult {
    /// `None` when no priced medicines exist. The field itself is required.
    #[serde(rename = "average_price", deserialize_with = "nullable_number")]
    pub average: Option<f64>,
    #[serde(default)]
    pub count: Value,
    #[serde(default)]
    pub message: Value,
}

impl AveragePriceResult {
    /// The count as displayed: integral numbers lose their fraction
    /// (`4.0` reads `4`), and a missing or null count reads `0`.
    pub fn count_text(&self) -> String {
        match &self.count {
            Value::Null => "0".to_string(),
            Value::String(s) => s.clone(),
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            },
            other => other.to_string(),
        }
    }

    /// The service message, if it holds a truthy value. Non-string values
    /// are shown by their JSON text.
    pub fn message_text(&self) -> Option<String> {
        match &self.message {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

// Present-but-null is `None`; an absent field is a decode error.
fn nullable_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<f64>::deserialize(deserializer)
}
