//! Template fields — one interpolated value taken from a request's `data`.
//!
//! Payload fields are never required. Anything missing renders as empty text
//! instead of failing the request:
//! - strings render verbatim
//! - numbers render as their JSON text, except integral floats which drop
//!   the fractional part (`3.0` renders `3`)
//! - booleans render as `true` / `false`
//! - `null` or an absent key renders as the empty string
//! - arrays and objects render as compact JSON
//!
//! Absent, `null`, `false`, `0` and `""` are falsy; they trigger fallbacks
//! and hide optional paragraphs.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single optional value from the notification payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateField(Option<Value>);

impl TemplateField {
    pub fn new(value: Value) -> Self {
        Self(Some(value))
    }

    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// Numeric view of the field. Numeric strings are coerced.
    pub fn as_number(&self) -> Option<f64> {
        match &self.0 {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Rendered value if truthy, otherwise `fallback`.
    pub fn or(&self, fallback: &str) -> String {
        if self.is_truthy() {
            self.to_string()
        } else {
            fallback.to_string()
        }
    }
}

impl fmt::Display for TemplateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None | Some(Value::Null) => Ok(()),
            Some(Value::String(s)) => f.write_str(s),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => {
                    write!(f, "{}", v as i64)
                }
                _ => write!(f, "{}", n),
            },
            Some(other) => write!(f, "{}", other),
        }
    }
}

impl<'de> Deserialize<'de> for TemplateField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Value>::deserialize(deserializer).map(TemplateField)
    }
}

/// Decode a per-type field record from a raw payload.
///
/// A payload that is absent or not an object yields the all-empty record.
pub fn extract<T>(data: &Value) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    serde_json::from_value(data.clone()).unwrap_or_default()
}
