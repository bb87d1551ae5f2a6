//! Single-style resolution.

use crate::style::{LayerOrigin, StyleLayers, StyleMap};
use crate::theme::{BuildParams, Viewport};
use crate::variant::{Definition, Selection, Variants};

/// Resolves variant selections against one [`Definition`].
///
/// Precedence, lowest to highest:
///
/// 1. `base`
/// 2. the style of each default variant, in `default_variants` order
/// 3. the style of each selected variant, in selection order
///
/// Groups or values the definition does not know contribute nothing.
///
/// # Example
///
/// ```rust
/// use varistyle::{unique, Definition, Selection, StyleMap, VariantGroup};
///
/// let avatar = unique(
///     Definition::new()
///         .base(StyleMap::new().set("width", 50))
///         .variant(
///             "size",
///             VariantGroup::new()
///                 .value("small", StyleMap::new().set("width", 50))
///                 .value("large", StyleMap::new().set("width", 100)),
///         )
///         .default_variant("size", "small"),
/// );
///
/// assert_eq!(avatar.resolve(&Selection::new()), StyleMap::new().set("width", 50));
/// assert_eq!(
///     avatar.resolve(&Selection::new().with("size", "large")),
///     StyleMap::new().set("width", 100)
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Unique {
    definition: Definition,
}

impl Unique {
    /// Creates a resolver for a static definition.
    pub fn new(definition: Definition) -> Self {
        tracing::debug!(
            base = definition.base.len(),
            groups = definition.variants.len(),
            defaults = definition.default_variants.len(),
            "built single-style resolver"
        );
        Self { definition }
    }

    /// Returns the definition this resolver was built from.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Returns the ordered layers that `resolve` would merge.
    pub fn layers(&self, selection: &Selection) -> StyleLayers<'_> {
        let definition = &self.definition;
        let mut layers = StyleLayers::new().push(LayerOrigin::Base, &definition.base);
        push_variant_layers(
            &mut layers,
            &definition.variants,
            &definition.default_variants,
            LayerOrigin::Default,
        );
        push_variant_layers(
            &mut layers,
            &definition.variants,
            selection,
            LayerOrigin::Selected,
        );
        layers
    }

    /// Resolves a selection into a fresh style map.
    pub fn resolve(&self, selection: &Selection) -> StyleMap {
        self.layers(selection).flatten()
    }
}

/// Appends the style of every `(group, value)` pair that `variants` knows.
pub(crate) fn push_variant_layers<'a>(
    layers: &mut StyleLayers<'a>,
    variants: &'a Variants,
    selection: &Selection,
    origin: LayerOrigin,
) {
    for (group, value) in selection.iter() {
        match variants.lookup(group, value) {
            Some(style) => layers.add(origin, style),
            None => tracing::trace!(group, value, ?origin, "no style for variant, skipping"),
        }
    }
}

/// Builds a single-style resolver from a static definition.
pub fn unique(definition: Definition) -> Unique {
    Unique::new(definition)
}

/// Builds a single-style resolver from a theme-derived definition.
///
/// `build` runs once, here; the returned resolver does not keep the theme.
pub fn unique_with<T, F>(theme: &T, viewport: &Viewport, build: F) -> Unique
where
    F: FnOnce(&BuildParams<'_, T>) -> Definition,
{
    let params = BuildParams::new(theme, viewport);
    Unique::new(build(&params))
}
