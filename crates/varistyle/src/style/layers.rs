//! Ordered style layers and the last-write-wins reducer.
//!
//! Every resolver in this crate describes its result as a short list of
//! layers and hands it to [`StyleLayers::flatten`]:
//!
//! ```text
//! base → default variant styles → selected variant styles
//! ```
//!
//! Layers are applied left to right; on key collision the later layer wins.

use super::map::StyleMap;

/// Where a layer came from. Used for tracing and inspection only; the
/// reduction order is always the push order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayerOrigin {
    /// The definition's base style.
    Base,
    /// A style contributed by a default variant.
    Default,
    /// A style contributed by the caller's selection.
    Selected,
}

/// An ordered list of borrowed style maps.
///
/// # Example
///
/// ```rust
/// use varistyle::{LayerOrigin, StyleLayers, StyleMap};
///
/// let base = StyleMap::new().set("width", 50).set("height", 50);
/// let large = StyleMap::new().set("width", 100);
///
/// let merged = StyleLayers::new()
///     .push(LayerOrigin::Base, &base)
///     .push(LayerOrigin::Selected, &large)
///     .flatten();
///
/// assert_eq!(merged, StyleMap::new().set("width", 100).set("height", 50));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleLayers<'a> {
    layers: Vec<(LayerOrigin, &'a StyleMap)>,
}

impl<'a> StyleLayers<'a> {
    /// Creates an empty layer list.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Appends a layer, returning the list for chaining.
    #[must_use]
    pub fn push(mut self, origin: LayerOrigin, style: &'a StyleMap) -> Self {
        self.layers.push((origin, style));
        self
    }

    /// Appends a layer in place.
    pub fn add(&mut self, origin: LayerOrigin, style: &'a StyleMap) {
        self.layers.push((origin, style));
    }

    /// Returns the number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if no layers were pushed.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterates layers in application order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerOrigin, &'a StyleMap)> + '_ {
        self.layers.iter().copied()
    }

    /// Reduces the layers into one fresh map, later layers overwriting earlier ones.
    pub fn flatten(&self) -> StyleMap {
        flatten(self.layers.iter().map(|(_, style)| *style))
    }
}

/// Reduces style maps left to right with per-key last-write-wins.
pub fn flatten<'a, I>(layers: I) -> StyleMap
where
    I: IntoIterator<Item = &'a StyleMap>,
{
    let mut merged = StyleMap::new();
    for layer in layers {
        merged.merge_from(layer);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layers_flatten_to_empty_map() {
        assert!(StyleLayers::new().flatten().is_empty());
    }

    #[test]
    fn test_later_layer_wins() {
        let base = StyleMap::new().set("color", "red");
        let default = StyleMap::new().set("color", "green");
        let selected = StyleMap::new().set("color", "blue");

        let merged = StyleLayers::new()
            .push(LayerOrigin::Base, &base)
            .push(LayerOrigin::Default, &default)
            .push(LayerOrigin::Selected, &selected)
            .flatten();

        assert_eq!(merged.get("color").and_then(|v| v.as_str()), Some("blue"));
    }

    #[test]
    fn test_push_order_not_origin_decides() {
        let selected = StyleMap::new().set("width", 1);
        let base = StyleMap::new().set("width", 2);

        let merged = StyleLayers::new()
            .push(LayerOrigin::Selected, &selected)
            .push(LayerOrigin::Base, &base)
            .flatten();

        assert_eq!(merged.get("width").and_then(|v| v.as_number()), Some(2.0));
    }

    #[test]
    fn test_flatten_does_not_touch_inputs() {
        let base = StyleMap::new().set("padding", 4);
        let overlay = StyleMap::new().set("margin", 2);

        let merged = flatten([&base, &overlay]);

        assert_eq!(merged.len(), 2);
        assert_eq!(base.len(), 1);
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn test_iter_reports_origins() {
        let base = StyleMap::new();
        let mut layers = StyleLayers::new();
        layers.add(LayerOrigin::Base, &base);
        layers.add(LayerOrigin::Default, &base);

        let origins: Vec<_> = layers.iter().map(|(origin, _)| origin).collect();
        assert_eq!(origins, vec![LayerOrigin::Base, LayerOrigin::Default]);
        assert_eq!(layers.len(), 2);
    }
}
