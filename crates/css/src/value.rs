//! Declaration values
//!
//! Values are serialized verbatim; nothing here validates CSS syntax.

use std::fmt;

use serde_json::Value;

/// A single declaration value
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Text value, emitted as-is (e.g., `black`, `1px solid red`)
    Text(String),
    /// Integer value
    Integer(i64),
    /// Non-integer numeric value
    Number(f64),
}

impl StyleValue {
    /// Convert a JSON scalar into a value.
    ///
    /// Strings and numbers map directly. Anything else is not a valid
    /// declaration value and is coerced to its JSON text.
    pub fn from_json(property: &str, value: &Value) -> Self {
        match value {
            Value::String(s) => StyleValue::Text(s.clone()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    StyleValue::Integer(i)
                } else {
                    StyleValue::Number(n.as_f64().unwrap_or_default())
                }
            }
            other => {
                log::warn!("Coercing non-scalar value of '{}' to text: {}", property, other);
                StyleValue::Text(other.to_string())
            }
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Integer(i) => write!(f, "{}", i),
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<i32> for StyleValue {
    fn from(i: i32) -> Self {
        StyleValue::Integer(i64::from(i))
    }
}

impl From<i64> for StyleValue {
    fn from(i: i64) -> Self {
        StyleValue::Integer(i)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}
