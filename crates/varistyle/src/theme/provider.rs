//! Explicit theme carrier.
//!
//! A theme is any consumer type. Rather than being read from ambient state,
//! it is handed to definition builders through [`BuildParams`], either
//! directly (`unique_with`, `slots_with`, `nv_with`) or via a
//! [`ThemeProvider`] that owns the theme and the viewport and builds
//! resolvers on request.
//!
//! Building is a two-stage process: a builder closure turns the theme into a
//! static [`Definition`], and the resulting resolver no longer depends on
//! the theme.

use super::responsive::{Percent, Viewport};
use crate::resolve::{nv_with, slots_with, unique_with, Nv, NvOptions, Slots, Unique};
use crate::variant::{Definition, SlotSet};

/// Inputs available to a definition builder.
///
/// # Example
///
/// ```rust
/// use varistyle::{unique_with, Definition, StyleMap, Viewport};
///
/// struct Theme {
///     surface: &'static str,
/// }
///
/// let theme = Theme { surface: "#18181b" };
/// let viewport = Viewport::new(400.0, 800.0);
///
/// let card = unique_with(&theme, &viewport, |params| {
///     Definition::new().base(
///         StyleMap::new()
///             .set("backgroundColor", params.theme().surface)
///             .set("width", params.width(90)),
///     )
/// });
///
/// let style = card.resolve(&Default::default());
/// assert_eq!(style.get("width").and_then(|v| v.as_number()), Some(360.0));
/// ```
#[derive(Debug)]
pub struct BuildParams<'a, T> {
    theme: &'a T,
    viewport: &'a Viewport,
}

impl<'a, T> BuildParams<'a, T> {
    /// Creates build inputs from a theme and a viewport.
    pub fn new(theme: &'a T, viewport: &'a Viewport) -> Self {
        Self { theme, viewport }
    }

    /// Returns the theme.
    pub fn theme(&self) -> &'a T {
        self.theme
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> &'a Viewport {
        self.viewport
    }

    /// Converts a percentage of the viewport width into pixels.
    pub fn width(&self, percent: impl Into<Percent>) -> f64 {
        self.viewport.width(percent)
    }

    /// Converts a percentage of the viewport height into pixels.
    pub fn height(&self, percent: impl Into<Percent>) -> f64 {
        self.viewport.height(percent)
    }
}

/// Owns a theme and a viewport and builds theme-aware resolvers.
///
/// Reading the theme never fails; there is no "outside of a provider" state.
///
/// # Example
///
/// ```rust
/// use varistyle::{Definition, Selection, StyleMap, ThemeProvider, VariantGroup, Viewport};
///
/// struct Theme {
///     accent: &'static str,
/// }
///
/// let provider = ThemeProvider::new(Theme { accent: "#3b82f6" }, Viewport::new(390.0, 844.0));
///
/// let button = provider.unique(|params| {
///     Definition::new()
///         .base(StyleMap::new().set("backgroundColor", params.theme().accent))
///         .variant(
///             "size",
///             VariantGroup::new()
///                 .value("sm", StyleMap::new().set("padding", 4))
///                 .value("lg", StyleMap::new().set("padding", 12)),
///         )
///         .default_variant("size", "sm")
/// });
///
/// let style = button.resolve(&Selection::new().with("size", "lg"));
/// assert_eq!(style.get("padding").and_then(|v| v.as_number()), Some(12.0));
/// ```
#[derive(Debug, Clone)]
pub struct ThemeProvider<T> {
    theme: T,
    viewport: Viewport,
}

impl<T> ThemeProvider<T> {
    /// Creates a provider for a theme and viewport.
    pub fn new(theme: T, viewport: Viewport) -> Self {
        Self { theme, viewport }
    }

    /// Returns the theme.
    pub fn theme(&self) -> &T {
        &self.theme
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replaces the theme, e.g. when switching between light and dark.
    pub fn set_theme(&mut self, theme: T) {
        self.theme = theme;
    }

    /// Replaces the viewport, e.g. after a rotation.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Returns build inputs borrowing this provider.
    pub fn params(&self) -> BuildParams<'_, T> {
        BuildParams::new(&self.theme, &self.viewport)
    }

    /// Builds a single-style resolver from a theme-derived definition.
    pub fn unique<F>(&self, build: F) -> Unique
    where
        F: FnOnce(&BuildParams<'_, T>) -> Definition,
    {
        unique_with(&self.theme, &self.viewport, build)
    }

    /// Builds a multi-slot resolver from theme-derived slot definitions.
    pub fn slots<F>(&self, build: F) -> Slots
    where
        F: FnOnce(&BuildParams<'_, T>) -> SlotSet,
    {
        slots_with(&self.theme, &self.viewport, build)
    }

    /// Builds a legacy combined resolver from theme-derived options.
    pub fn nv<F>(&self, build: F) -> Nv
    where
        F: FnOnce(&T) -> NvOptions,
    {
        nv_with(&self.theme, build)
    }
}
