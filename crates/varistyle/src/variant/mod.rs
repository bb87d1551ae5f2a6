//! Variant definitions and selections.

mod definition;
mod load;
mod selection;

pub(crate) use load::{parse_yaml, read_source, read_yaml_file};

pub use definition::{Definition, SlotSet, VariantGroup, Variants};
pub use selection::Selection;
