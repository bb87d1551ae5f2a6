//! Insertion-ordered style maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// A flat collection of style declarations, keyed by property name.
///
/// Keys keep their first insertion position; overwriting a key replaces the
/// value in place. Equality ignores order.
///
/// # Example
///
/// ```rust
/// use varistyle::StyleMap;
///
/// let style = StyleMap::new()
///     .set("width", 50)
///     .set("borderRadius", 8)
///     .set("overflow", "hidden");
///
/// assert_eq!(style.len(), 3);
/// assert_eq!(style.get("overflow").and_then(|v| v.as_str()), Some("hidden"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: IndexMap<String, StyleValue>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a declaration, returning the map for chaining.
    pub fn set<V: Into<StyleValue>>(mut self, key: impl Into<String>, value: V) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Inserts a declaration, returning the previous value if any.
    pub fn insert<V: Into<StyleValue>>(
        &mut self,
        key: impl Into<String>,
        value: V,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value of a declaration.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Returns true if the declaration is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no declarations are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copies every declaration of `other` into `self`, overwriting on collision.
    ///
    /// This is a shallow merge: nested maps are replaced, not merged.
    pub fn merge_from(&mut self, other: &StyleMap) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Converts to a JSON object preserving declaration order.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
