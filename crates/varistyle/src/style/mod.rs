//! Style primitives: declaration values, ordered maps and layer reduction.

mod layers;
mod map;
mod value;

pub use layers::{flatten, LayerOrigin, StyleLayers};
pub use map::StyleMap;
pub use value::StyleValue;
