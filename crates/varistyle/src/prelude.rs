//! Convenient imports for defining and resolving component styles.
//!
//! ```rust
//! use varistyle::prelude::*;
//!
//! let chip = unique(
//!     Definition::new()
//!         .base(StyleMap::new().set("borderRadius", 999))
//!         .variant(
//!             "tone",
//!             VariantGroup::new().value(
//!                 "muted",
//!                 StyleMap::new().set("backgroundColor", tokens::STONE.get(TokenColorKey::S100)),
//!             ),
//!         ),
//! );
//!
//! let style = chip.resolve(&Selection::new().with("tone", "muted"));
//! assert_eq!(style.len(), 2);
//! ```

pub use crate::color::tokens::{self, TokenColor, TokenColorKey};
pub use crate::color::{alpha, AlphaValue};
pub use crate::resolve::{nv, nv_with, slots, slots_with, unique, unique_with};
pub use crate::resolve::{NvOptions, SlotSelection};
pub use crate::style::{StyleMap, StyleValue};
pub use crate::theme::{BuildParams, ThemeProvider, Viewport};
pub use crate::variant::{Definition, Selection, SlotSet, VariantGroup};
