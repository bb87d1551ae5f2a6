//! Variant selections: which value is active for each variant group.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A mapping from variant group name to the chosen value key.
///
/// Used both for a definition's default variants and for the caller's
/// per-render choices. Iteration follows insertion order, which is also the
/// order in which variant styles are layered.
///
/// # Example
///
/// ```rust
/// use varistyle::Selection;
///
/// let defaults = Selection::new().with("size", "small").with("tone", "neutral");
/// let caller = Selection::new().with("size", "large");
///
/// let merged = caller.merged_over(&defaults);
/// assert_eq!(merged.get("size"), Some("large"));
/// assert_eq!(merged.get("tone"), Some("neutral"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    choices: IndexMap<String, String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses `value` for `group`, returning the selection for chaining.
    #[must_use]
    pub fn with(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.choices.insert(group.into(), value.into());
        self
    }

    /// Chooses `value` for `group` in place, returning the previous choice.
    pub fn set(&mut self, group: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.choices.insert(group.into(), value.into())
    }

    /// Returns the chosen value for a group.
    pub fn get(&self, group: &str) -> Option<&str> {
        self.choices.get(group).map(String::as_str)
    }

    /// Returns the number of chosen groups.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns true if nothing is chosen.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Iterates `(group, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(g, v)| (g.as_str(), v.as_str()))
    }

    /// Shallow-merges `self` over `defaults`.
    ///
    /// Groups present in both take this selection's value; groups only in
    /// `defaults` are kept. Keys keep their position from `defaults`.
    pub fn merged_over(&self, defaults: &Selection) -> Selection {
        let mut merged = defaults.clone();
        for (group, value) in &self.choices {
            merged.choices.insert(group.clone(), value.clone());
        }
        merged
    }
}

impl<G: Into<String>, V: Into<String>> FromIterator<(G, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (G, V)>>(iter: I) -> Self {
        Self {
            choices: iter
                .into_iter()
                .map(|(g, v)| (g.into(), v.into()))
                .collect(),
        }
    }
}
