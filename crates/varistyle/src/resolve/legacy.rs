//! The legacy combined resolver.
//!
//! `nv` predates `unique` and `slots` and accepts either shape through one
//! entry point. The shape is fixed when the options are built:
//!
//! - options with a `slots` key copy each slot's style as-is; the caller's
//!   selection is not consulted at all;
//! - anything else is a [`Definition`] resolved like `unique`.

use std::path::Path;

use serde::Deserialize;

use super::slots::SlotStyles;
use super::unique::Unique;
use crate::error::Result;
use crate::style::StyleMap;
use crate::variant::{parse_yaml, read_source, Definition, Selection};

/// Options accepted by [`nv`].
#[derive(Debug, Clone, PartialEq)]
pub enum NvOptions {
    /// Fixed per-slot styles.
    Slots(SlotStyles),
    /// A single-style definition with variants.
    Variant(Definition),
}

#[derive(Deserialize)]
struct SlotOptions {
    slots: SlotStyles,
}

/// Picks the shape from the top-level keys, then parses the document as
/// that shape.
fn parse_options(yaml: &str, path: Option<&Path>) -> Result<NvOptions> {
    let document: serde_yaml::Value = parse_yaml(yaml, path)?;
    if document.get("slots").is_some() {
        let SlotOptions { slots } = parse_yaml(yaml, path)?;
        Ok(NvOptions::Slots(slots))
    } else {
        parse_yaml(yaml, path).map(NvOptions::Variant)
    }
}

impl NvOptions {
    /// Creates slot options from `(slot, style)` pairs.
    pub fn slots<I, K>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, StyleMap)>,
        K: Into<String>,
    {
        NvOptions::Slots(slots.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns true for the slots shape.
    pub fn is_slots(&self) -> bool {
        matches!(self, NvOptions::Slots(_))
    }

    /// Parses options from YAML. A top-level `slots` key selects the slots shape.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`](crate::StyleError::Parse) if the YAML
    /// is malformed or does not fit the selected shape.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_options(yaml, None)
    }

    /// Loads options from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Load`](crate::StyleError::Load) or
    /// [`StyleError::Parse`](crate::StyleError::Parse).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        parse_options(&read_source(path)?, Some(path))
    }
}

impl From<Definition> for NvOptions {
    fn from(definition: Definition) -> Self {
        NvOptions::Variant(definition)
    }
}

impl From<SlotStyles> for NvOptions {
    fn from(slots: SlotStyles) -> Self {
        NvOptions::Slots(slots)
    }
}

/// Output of [`Nv::resolve`], mirroring the options' shape.
#[derive(Debug, Clone, PartialEq)]
pub enum NvStyles {
    /// Result of the variant shape.
    Single(StyleMap),
    /// Result of the slots shape.
    Slots(SlotStyles),
}

impl NvStyles {
    /// Returns the single style, if this came from the variant shape.
    pub fn as_single(&self) -> Option<&StyleMap> {
        match self {
            NvStyles::Single(style) => Some(style),
            NvStyles::Slots(_) => None,
        }
    }

    /// Returns the slot styles, if this came from the slots shape.
    pub fn as_slots(&self) -> Option<&SlotStyles> {
        match self {
            NvStyles::Slots(slots) => Some(slots),
            NvStyles::Single(_) => None,
        }
    }

    /// Converts to JSON for hand-off to a host framework.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            NvStyles::Single(style) => style.to_json(),
            NvStyles::Slots(slots) => slots.to_json(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Slots(SlotStyles),
    Variant(Unique),
}

/// The legacy combined resolver.
///
/// # Example
///
/// ```rust
/// use varistyle::{nv, NvOptions, Selection, StyleMap};
///
/// let tabs = nv(NvOptions::slots([
///     ("tabs_list", StyleMap::new().set("flexDirection", "row").set("gap", 2)),
///     ("tab", StyleMap::new().set("paddingHorizontal", 20)),
///     ("panel", StyleMap::new().set("paddingVertical", 14)),
/// ]));
///
/// let styles = tabs.resolve(&Selection::new());
/// let slots = styles.as_slots().unwrap();
/// assert_eq!(slots.len(), 3);
/// assert_eq!(tabs.resolve(&Selection::new().with("size", "lg")), styles);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Nv {
    shape: Shape,
}

impl Nv {
    /// Creates a resolver, fixing its shape from the options.
    pub fn new(options: NvOptions) -> Self {
        let shape = match options {
            NvOptions::Slots(slots) => {
                tracing::debug!(slots = slots.len(), "built legacy resolver (slots)");
                Shape::Slots(slots)
            }
            NvOptions::Variant(definition) => Shape::Variant(Unique::new(definition)),
        };
        Self { shape }
    }

    /// Returns true if this resolver was built from slot options.
    pub fn is_slots(&self) -> bool {
        matches!(self.shape, Shape::Slots(_))
    }

    /// Resolves a selection. The slots shape ignores `selection`.
    pub fn resolve(&self, selection: &Selection) -> NvStyles {
        match &self.shape {
            Shape::Slots(slots) => NvStyles::Slots(slots.clone()),
            Shape::Variant(resolver) => NvStyles::Single(resolver.resolve(selection)),
        }
    }
}

/// Builds a legacy combined resolver from static options.
pub fn nv(options: impl Into<NvOptions>) -> Nv {
    Nv::new(options.into())
}

/// Builds a legacy combined resolver from theme-derived options.
///
/// Unlike [`unique_with`](super::unique_with), the builder receives only the
/// theme.
pub fn nv_with<T, F>(theme: &T, build: F) -> Nv
where
    F: FnOnce(&T) -> NvOptions,
{
    Nv::new(build(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::VariantGroup;

    fn tabs() -> NvOptions {
        NvOptions::slots([
            ("tab", StyleMap::new().set("padding", 6)),
            ("panel", StyleMap::new().set("padding", 14)),
        ])
    }

    #[test]
    fn test_slots_shape_copies_styles() {
        let resolver = nv(tabs());
        assert!(resolver.is_slots());

        let styles = resolver.resolve(&Selection::new());
        assert_eq!(
            styles.as_slots().and_then(|s| s.get("panel")),
            Some(&StyleMap::new().set("padding", 14))
        );
        assert!(styles.as_single().is_none());
    }

    #[test]
    fn test_slots_shape_ignores_selection() {
        let resolver = nv(tabs());
        assert_eq!(
            resolver.resolve(&Selection::new()),
            resolver.resolve(&Selection::new().with("tab", "active"))
        );
    }

    #[test]
    fn test_variant_shape_resolves_like_unique() {
        let definition = Definition::new()
            .base(StyleMap::new().set("opacity", 1))
            .variant(
                "state",
                VariantGroup::new().value("disabled", StyleMap::new().set("opacity", 0.4)),
            );
        let resolver = nv(definition.clone());
        assert!(!resolver.is_slots());

        let selection = Selection::new().with("state", "disabled");
        assert_eq!(
            resolver.resolve(&selection).as_single(),
            Some(&Unique::new(definition).resolve(&selection))
        );
    }

    #[test]
    fn test_from_yaml_picks_slots_shape() {
        let options = NvOptions::from_yaml(
            r#"
            slots:
                tab:
                    padding: 6
            "#,
        )
        .unwrap();
        assert!(options.is_slots());
    }

    #[test]
    fn test_from_yaml_picks_variant_shape() {
        let options = NvOptions::from_yaml(
            r#"
            base:
                padding: 6
            variants:
                size:
                    lg: { padding: 12 }
            "#,
        )
        .unwrap();
        assert!(!options.is_slots());
    }

    #[test]
    fn test_from_yaml_keeps_scalar_variant_keys() {
        let yaml = r#"
            variants:
                disabled:
                    true: { opacity: 0.5 }
                    false: { opacity: 1 }
                size:
                    1: { padding: 4 }
            defaultVariants:
                disabled: false
            "#;

        let definition = Definition::from_yaml(yaml).unwrap();
        let options = NvOptions::from_yaml(yaml).unwrap();
        assert_eq!(options, NvOptions::Variant(definition));

        let resolver = nv(options);
        assert_eq!(
            resolver.resolve(&Selection::new()).to_json(),
            serde_json::json!({ "opacity": 1 })
        );
        assert_eq!(
            resolver
                .resolve(&Selection::new().with("disabled", "true").with("size", "1"))
                .to_json(),
            serde_json::json!({ "opacity": 0.5, "padding": 4 })
        );
    }

    #[test]
    fn test_from_yaml_slot_keys_may_be_scalars() {
        let options = NvOptions::from_yaml(
            r#"
            slots:
                1:
                    padding: 6
            "#,
        )
        .unwrap();
        let styles = nv(options).resolve(&Selection::new());
        assert_eq!(
            styles.as_slots().and_then(|s| s.get("1")),
            Some(&StyleMap::new().set("padding", 6))
        );
    }

    #[test]
    fn test_from_yaml_reports_unknown_field() {
        let err = NvOptions::from_yaml("bsae:\n  padding: 6\n").unwrap_err();
        match err {
            crate::StyleError::Parse { message, .. } => {
                assert!(message.contains("bsae"), "unexpected message: {}", message)
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_reports_bad_slot_value() {
        let err = NvOptions::from_yaml("slots:\n  tab: 6\n").unwrap_err();
        match err {
            crate::StyleError::Parse { message, .. } => {
                assert!(!message.contains("untagged"), "unexpected message: {}", message)
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_nv_with_passes_theme() {
        let resolver = nv_with(&"#f43f5e", |accent| {
            NvOptions::slots([("dot", StyleMap::new().set("backgroundColor", *accent))])
        });
        let styles = resolver.resolve(&Selection::new());
        assert_eq!(
            styles.to_json(),
            serde_json::json!({ "dot": { "backgroundColor": "#f43f5e" } })
        );
    }
}
