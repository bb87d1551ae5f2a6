//! Theme carrier and viewport units.
//!
//! Themes are passed explicitly. A resolver factory that needs the theme
//! takes it as an argument, runs the consumer's builder once, and keeps only
//! the resulting static definition:
//!
//! ```text
//! (theme, viewport) --builder--> Definition --factory--> resolver
//! ```
//!
//! The viewport supplies `width(%)` / `height(%)` conversions to builders.

mod provider;
mod responsive;

pub use provider::{BuildParams, ThemeProvider};
pub use responsive::{Percent, Viewport};
