//! Multi-slot resolution for composite components.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::unique::Unique;
use crate::style::StyleMap;
use crate::theme::{BuildParams, Viewport};
use crate::variant::{Selection, SlotSet};

/// Per-slot variant selections.
///
/// # Example
///
/// ```rust
/// use varistyle::{Selection, SlotSelection};
///
/// let selection = SlotSelection::new()
///     .slot("avatar", Selection::new().with("size", "large"));
/// assert_eq!(selection.get("avatar").and_then(|s| s.get("size")), Some("large"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSelection {
    slots: IndexMap<String, Selection>,
}

impl SlotSelection {
    /// Creates an empty slot selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection for a slot, returning the value for chaining.
    #[must_use]
    pub fn slot(mut self, name: impl Into<String>, selection: Selection) -> Self {
        self.slots.insert(name.into(), selection);
        self
    }

    /// Returns the selection for a slot.
    pub fn get(&self, name: &str) -> Option<&Selection> {
        self.slots.get(name)
    }

    /// Returns the number of slots with a selection.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slot has a selection.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Resolved styles keyed by slot name, in slot definition order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotStyles {
    styles: IndexMap<String, StyleMap>,
}

impl SlotStyles {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slot's style, returning the collection for chaining.
    #[must_use]
    pub fn slot(mut self, name: impl Into<String>, style: StyleMap) -> Self {
        self.styles.insert(name.into(), style);
        self
    }

    /// Returns the style of a slot.
    pub fn get(&self, name: &str) -> Option<&StyleMap> {
        self.styles.get(name)
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterates `(slot, style)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleMap)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consumes the collection, returning the underlying map.
    pub fn into_inner(self) -> IndexMap<String, StyleMap> {
        self.styles
    }

    /// Converts to a JSON object of slot name to style object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.styles
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl FromIterator<(String, StyleMap)> for SlotStyles {
    fn from_iter<I: IntoIterator<Item = (String, StyleMap)>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}

/// Resolves per-slot selections against a [`SlotSet`].
///
/// Each slot is resolved independently: its own defaults are shallow-merged
/// with the caller's selection for that slot (caller wins per group), and
/// the result goes through the slot's single-style resolver.
///
/// # Example
///
/// ```rust
/// use varistyle::{slots, Definition, SlotSelection, SlotSet, StyleMap};
///
/// let tabs = slots(
///     SlotSet::new()
///         .slot("tab", Definition::new().base(StyleMap::new().set("padding", 6)))
///         .slot("panel", Definition::new().base(StyleMap::new().set("padding", 14))),
/// );
///
/// let styles = tabs.resolve(&SlotSelection::new());
/// assert_eq!(styles.get("tab"), Some(&StyleMap::new().set("padding", 6)));
/// assert_eq!(styles.get("panel"), Some(&StyleMap::new().set("padding", 14)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Slots {
    slots: IndexMap<String, Unique>,
}

impl Slots {
    /// Creates a resolver for a static slot set.
    pub fn new(set: SlotSet) -> Self {
        tracing::debug!(slots = set.len(), "built multi-slot resolver");
        let slots = set
            .into_iter()
            .map(|(name, definition)| (name, Unique::new(definition)))
            .collect();
        Self { slots }
    }

    /// Returns the single-style resolver of a slot.
    pub fn slot(&self, name: &str) -> Option<&Unique> {
        self.slots.get(name)
    }

    /// Iterates slot names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Resolves every slot. Selections for unknown slots are ignored.
    pub fn resolve(&self, selection: &SlotSelection) -> SlotStyles {
        let empty = Selection::new();
        self.slots
            .iter()
            .map(|(name, resolver)| {
                let caller = selection.get(name).unwrap_or(&empty);
                let merged = caller.merged_over(&resolver.definition().default_variants);
                (name.clone(), resolver.resolve(&merged))
            })
            .collect()
    }
}

/// Builds a multi-slot resolver from a static slot set.
pub fn slots(set: SlotSet) -> Slots {
    Slots::new(set)
}

/// Builds a multi-slot resolver from theme-derived slot definitions.
///
/// `build` runs once, here; the returned resolver does not keep the theme.
pub fn slots_with<T, F>(theme: &T, viewport: &Viewport, build: F) -> Slots
where
    F: FnOnce(&BuildParams<'_, T>) -> SlotSet,
{
    let params = BuildParams::new(theme, viewport);
    Slots::new(build(&params))
}
