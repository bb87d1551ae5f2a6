//! Component definitions: base style, variant groups and defaults.
//!
//! A [`Definition`] is the static description a resolver is built from.
//! Definitions can be written with the builder API or loaded from YAML:
//!
//! ```yaml
//! base:
//!   borderRadius: 50
//!   overflow: hidden
//! variants:
//!   size:
//!     small: { width: 50, height: 50 }
//!     large: { width: 100, height: 100 }
//! defaultVariants:
//!   size: small
//! ```
//!
//! Composite components use a [`SlotSet`], one definition per named slot.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::load::{parse_yaml, read_yaml_file};
use super::selection::Selection;
use crate::error::{Result, StyleError};
use crate::style::StyleMap;

/// The mutually exclusive values of one variant axis, each with its style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantGroup {
    values: IndexMap<String, StyleMap>,
}

impl VariantGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value and its style, returning the group for chaining.
    #[must_use]
    pub fn value(mut self, key: impl Into<String>, style: StyleMap) -> Self {
        self.values.insert(key.into(), style);
        self
    }

    /// Returns the style for a value key.
    pub fn get(&self, key: &str) -> Option<&StyleMap> {
        self.values.get(key)
    }

    /// Returns true if the value key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the group has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates value keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// All variant groups of a definition, keyed by group name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variants {
    groups: IndexMap<String, VariantGroup>,
}

impl Variants {
    /// Creates an empty set of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group, returning the set for chaining.
    #[must_use]
    pub fn group(mut self, name: impl Into<String>, group: VariantGroup) -> Self {
        self.groups.insert(name.into(), group);
        self
    }

    /// Returns a group by name.
    pub fn get(&self, name: &str) -> Option<&VariantGroup> {
        self.groups.get(name)
    }

    /// Looks up the style for `group = value`.
    ///
    /// Returns `None` when either the group or the value is unknown; callers
    /// treat that as "contributes nothing".
    pub fn lookup(&self, group: &str, value: &str) -> Option<&StyleMap> {
        self.groups.get(group).and_then(|g| g.get(value))
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no groups are defined.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates `(name, group)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantGroup)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A component's base style, variant groups and default selections.
///
/// # Example
///
/// ```rust
/// use varistyle::{Definition, StyleMap, VariantGroup};
///
/// let avatar = Definition::new()
///     .base(StyleMap::new().set("borderRadius", 50).set("overflow", "hidden"))
///     .variant(
///         "size",
///         VariantGroup::new()
///             .value("small", StyleMap::new().set("width", 50).set("height", 50))
///             .value("large", StyleMap::new().set("width", 100).set("height", 100)),
///     )
///     .default_variant("size", "small");
///
/// assert!(avatar.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Definition {
    /// Unconditional styles, applied first.
    pub base: StyleMap,
    /// Variant groups by name.
    pub variants: Variants,
    /// Value chosen for each group when the caller does not choose one.
    #[serde(alias = "defaultVariants")]
    pub default_variants: Selection,
}

impl Definition {
    /// Creates an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base style.
    #[must_use]
    pub fn base(mut self, base: StyleMap) -> Self {
        self.base = base;
        self
    }

    /// Adds a variant group.
    #[must_use]
    pub fn variant(mut self, name: impl Into<String>, group: VariantGroup) -> Self {
        self.variants = self.variants.group(name, group);
        self
    }

    /// Sets the default value of a variant group.
    #[must_use]
    pub fn default_variant(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_variants.set(group, value);
        self
    }

    /// Parses a definition from YAML.
    ///
    /// `defaultVariants` is accepted as an alias of `default_variants`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] if the YAML is malformed or has unknown
    /// top-level keys.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml(yaml, None)
    }

    /// Loads a definition from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Load`] if the file cannot be read, or
    /// [`StyleError::Parse`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_yaml_file(path.as_ref())
    }

    /// Checks that every default variant names an existing group value.
    ///
    /// Resolution never calls this; unknown defaults are simply skipped
    /// there. Call it to catch typos early.
    pub fn validate(&self) -> Result<()> {
        for (group, value) in self.default_variants.iter() {
            if self.variants.lookup(group, value).is_none() {
                return Err(StyleError::UnknownDefault {
                    group: group.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Definitions of a composite component, keyed by slot name.
///
/// # Example
///
/// ```rust
/// use varistyle::{Definition, SlotSet, StyleMap};
///
/// let tabs = SlotSet::new()
///     .slot("tab", Definition::new().base(StyleMap::new().set("padding", 6)))
///     .slot("panel", Definition::new().base(StyleMap::new().set("padding", 14)));
///
/// assert_eq!(tabs.names().collect::<Vec<_>>(), vec!["tab", "panel"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSet {
    slots: IndexMap<String, Definition>,
}

impl SlotSet {
    /// Creates an empty slot set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slot, returning the set for chaining.
    #[must_use]
    pub fn slot(mut self, name: impl Into<String>, definition: Definition) -> Self {
        self.slots.insert(name.into(), definition);
        self
    }

    /// Returns a slot's definition.
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.slots.get(name)
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slots are defined.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates slot names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Iterates `(name, definition)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parses a slot set from YAML (a mapping of slot name to definition).
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml(yaml, None)
    }

    /// Loads a slot set from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Load`] or [`StyleError::Parse`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_yaml_file(path.as_ref())
    }

    /// Validates every slot's default variants.
    pub fn validate(&self) -> Result<()> {
        self.slots.values().try_for_each(Definition::validate)
    }
}

impl IntoIterator for SlotSet {
    type Item = (String, Definition);
    type IntoIter = indexmap::map::IntoIter<String, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}
