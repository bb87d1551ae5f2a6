//! Resolver factories.
//!
//! | Factory | Input | Output per call |
//! |---------|-------|-----------------|
//! | [`unique()`] / [`unique_with`] | [`Definition`](crate::Definition) | [`StyleMap`](crate::StyleMap) |
//! | [`slots()`] / [`slots_with`] | [`SlotSet`](crate::SlotSet) | [`SlotStyles`] |
//! | [`nv`] / [`nv_with`] | [`NvOptions`] | [`NvStyles`] |
//!
//! Factories run once per component; the returned resolvers are immutable
//! and build a fresh result on every call. All of them reduce their layers
//! through [`StyleLayers::flatten`](crate::StyleLayers::flatten).

mod legacy;
mod slots;
mod unique;

pub use legacy::{nv, nv_with, Nv, NvOptions, NvStyles};
pub use slots::{slots, slots_with, SlotSelection, SlotStyles, Slots};
pub use unique::{unique, unique_with, Unique};
