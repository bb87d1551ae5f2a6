//! # Varistyle - Variant-Based Style Resolution
//!
//! `varistyle` turns a component description (a base style, named variant
//! groups and default choices) into a resolver that merges the active
//! variant selection into one flat style map, ready to hand to a UI host.
//!
//! ## Core Concepts
//!
//! - [`StyleMap`]: insertion-ordered property → [`StyleValue`] declarations
//! - [`Definition`]: base style, [`Variants`] and default [`Selection`]
//! - [`unique`]: single-style resolver
//! - [`slots`]: one resolver per named slot of a composite component
//! - [`nv`]: the legacy combined resolver
//! - [`ThemeProvider`] / [`BuildParams`]: explicit theme and viewport inputs
//! - [`tokens`] and [`alpha`]: palette constants and `rgba(...)` conversion
//!
//! ## Quick Start
//!
//! ```rust
//! use varistyle::{unique, Definition, Selection, StyleMap, VariantGroup};
//!
//! let avatar = unique(
//!     Definition::new()
//!         .base(StyleMap::new().set("borderRadius", 50).set("overflow", "hidden"))
//!         .variant(
//!             "size",
//!             VariantGroup::new()
//!                 .value("small", StyleMap::new().set("width", 50).set("height", 50))
//!                 .value("large", StyleMap::new().set("width", 100).set("height", 100)),
//!         )
//!         .default_variant("size", "small"),
//! );
//!
//! let style = avatar.resolve(&Selection::new().with("size", "large"));
//! assert_eq!(style.get("width").and_then(|v| v.as_number()), Some(100.0));
//! assert_eq!(style.get("overflow").and_then(|v| v.as_str()), Some("hidden"));
//! ```
//!
//! ## Precedence
//!
//! Resolution layers three kinds of style and lets the later one win on
//! every key:
//!
//! ```text
//! base → default variants (in declaration order) → selected variants (in selection order)
//! ```
//!
//! Selecting a group or value the definition does not know is a no-op.
//!
//! ## Slots
//!
//! ```rust
//! use varistyle::{slots, Definition, Selection, SlotSelection, SlotSet, StyleMap, VariantGroup};
//!
//! let card = slots(
//!     SlotSet::new()
//!         .slot("root", Definition::new().base(StyleMap::new().set("padding", 16)))
//!         .slot(
//!             "title",
//!             Definition::new()
//!                 .variant(
//!                     "weight",
//!                     VariantGroup::new()
//!                         .value("regular", StyleMap::new().set("fontWeight", "400"))
//!                         .value("bold", StyleMap::new().set("fontWeight", "700")),
//!                 )
//!                 .default_variant("weight", "regular"),
//!         ),
//! );
//!
//! let styles = card.resolve(
//!     &SlotSelection::new().slot("title", Selection::new().with("weight", "bold")),
//! );
//! assert_eq!(
//!     styles.get("title").and_then(|s| s.get("fontWeight")).and_then(|v| v.as_str()),
//!     Some("700")
//! );
//! ```
//!
//! ## Themes
//!
//! Theme-dependent definitions are built once from an explicit theme value:
//!
//! ```rust
//! use varistyle::{tokens, Definition, StyleMap, ThemeProvider, Viewport};
//!
//! struct Theme {
//!     surface: &'static str,
//! }
//!
//! let provider = ThemeProvider::new(
//!     Theme { surface: tokens::ZINC.get(tokens::TokenColorKey::S900) },
//!     Viewport::new(390.0, 844.0),
//! );
//!
//! let sheet = provider.unique(|p| {
//!     Definition::new().base(
//!         StyleMap::new()
//!             .set("backgroundColor", p.theme().surface)
//!             .set("height", p.height(50)),
//!     )
//! });
//!
//! let style = sheet.resolve(&Default::default());
//! assert_eq!(style.get("height").and_then(|v| v.as_number()), Some(422.0));
//! ```
//!
//! ## YAML Definitions
//!
//! ```rust
//! use varistyle::{unique, Definition, Selection};
//!
//! let button = Definition::from_yaml(r#"
//! base:
//!   borderRadius: 6
//! variants:
//!   size:
//!     sm: { paddingVertical: 4 }
//!     lg: { paddingVertical: 12 }
//! defaultVariants:
//!   size: sm
//! "#).unwrap();
//!
//! let style = unique(button).resolve(&Selection::new());
//! assert_eq!(style.get("paddingVertical").and_then(|v| v.as_number()), Some(4.0));
//! ```

mod color;
mod error;
pub mod prelude;
mod resolve;
mod style;
mod theme;
mod variant;

pub use error::{Result, StyleError};

pub use style::{flatten, LayerOrigin, StyleLayers, StyleMap, StyleValue};

pub use variant::{Definition, Selection, SlotSet, VariantGroup, Variants};

pub use resolve::{
    nv, nv_with, slots, slots_with, unique, unique_with, Nv, NvOptions, NvStyles, SlotSelection,
    SlotStyles, Slots, Unique,
};

pub use theme::{BuildParams, Percent, ThemeProvider, Viewport};

pub use color::tokens;
pub use color::{alpha, try_alpha, AlphaValue, Rgba};
