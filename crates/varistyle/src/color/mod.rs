//! Color helpers: palette tokens and alpha conversion.

mod alpha;
pub mod tokens;

pub use alpha::{alpha, try_alpha, AlphaValue, Rgba};
