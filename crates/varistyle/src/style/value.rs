//! Primitive style declaration values.

use serde::{Deserialize, Serialize};

use super::map::StyleMap;

/// The value of a single style declaration.
///
/// Resolvers never interpret values; they only copy them between layers.
/// Nested maps and lists cover layout primitives such as
/// `shadowOffset: { width, height }` or `transform: [...]`.
///
/// # Example
///
/// ```rust
/// use varistyle::StyleValue;
///
/// let width: StyleValue = 50.into();
/// let color: StyleValue = "#fafafa".into();
/// assert_eq!(width.as_number(), Some(50.0));
/// assert_eq!(color.as_str(), Some("#fafafa"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Boolean flag (e.g. `includeFontPadding`).
    Bool(bool),
    /// Numeric value in device-independent pixels or a unitless factor.
    Number(f64),
    /// String value: colors, keywords, percentages.
    String(String),
    /// Ordered list of values (e.g. `transform`).
    List(Vec<StyleValue>),
    /// Nested map (e.g. `shadowOffset`).
    Map(StyleMap),
}

impl StyleValue {
    /// Extracts the number, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the flag, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the nested map, if this is a `Map`.
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Converts to a JSON value for hand-off to a host framework.
    ///
    /// Whole numbers are emitted as JSON integers so that `50` stays `50`
    /// rather than becoming `50.0`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            StyleValue::Bool(b) => serde_json::Value::Bool(*b),
            StyleValue::Number(n) => number_to_json(*n),
            StyleValue::String(s) => serde_json::Value::String(s.clone()),
            StyleValue::List(items) => {
                serde_json::Value::Array(items.iter().map(StyleValue::to_json).collect())
            }
            StyleValue::Map(map) => map.to_json(),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::String(s)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(map: StyleMap) -> Self {
        StyleValue::Map(map)
    }
}

impl<V: Into<StyleValue>> From<Vec<V>> for StyleValue {
    fn from(items: Vec<V>) -> Self {
        StyleValue::List(items.into_iter().map(Into::into).collect())
    }
}
