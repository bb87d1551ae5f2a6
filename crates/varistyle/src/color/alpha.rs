//! Hex color to `rgba(...)` conversion with fixed opacity steps.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StyleError};

/// Opacity in steps of five percent.
///
/// Parsed from its two-digit key (`"05"`, `"10"` … `"95"`) or `"100"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlphaValue {
    /// 5% opacity.
    P05,
    /// 10% opacity.
    P10,
    /// 15% opacity.
    P15,
    /// 20% opacity.
    P20,
    /// 25% opacity.
    P25,
    /// 30% opacity.
    P30,
    /// 35% opacity.
    P35,
    /// 40% opacity.
    P40,
    /// 45% opacity.
    P45,
    /// 50% opacity.
    P50,
    /// 55% opacity.
    P55,
    /// 60% opacity.
    P60,
    /// 65% opacity.
    P65,
    /// 70% opacity.
    P70,
    /// 75% opacity.
    P75,
    /// 80% opacity.
    P80,
    /// 85% opacity.
    P85,
    /// 90% opacity.
    P90,
    /// 95% opacity.
    P95,
    /// 100% opacity.
    P100,
}

impl AlphaValue {
    /// All steps, from most transparent to opaque.
    pub const ALL: [AlphaValue; 20] = [
        AlphaValue::P05,
        AlphaValue::P10,
        AlphaValue::P15,
        AlphaValue::P20,
        AlphaValue::P25,
        AlphaValue::P30,
        AlphaValue::P35,
        AlphaValue::P40,
        AlphaValue::P45,
        AlphaValue::P50,
        AlphaValue::P55,
        AlphaValue::P60,
        AlphaValue::P65,
        AlphaValue::P70,
        AlphaValue::P75,
        AlphaValue::P80,
        AlphaValue::P85,
        AlphaValue::P90,
        AlphaValue::P95,
        AlphaValue::P100,
    ];

    /// Returns the opacity as a percentage (5–100).
    pub fn percent(self) -> u8 {
        (self as u8 + 1) * 5
    }

    /// Returns the opacity as a fraction (0.05–1).
    pub fn fraction(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    /// Returns the string key (`"05"` … `"100"`).
    pub fn as_str(self) -> &'static str {
        match self {
            AlphaValue::P05 => "05",
            AlphaValue::P10 => "10",
            AlphaValue::P15 => "15",
            AlphaValue::P20 => "20",
            AlphaValue::P25 => "25",
            AlphaValue::P30 => "30",
            AlphaValue::P35 => "35",
            AlphaValue::P40 => "40",
            AlphaValue::P45 => "45",
            AlphaValue::P50 => "50",
            AlphaValue::P55 => "55",
            AlphaValue::P60 => "60",
            AlphaValue::P65 => "65",
            AlphaValue::P70 => "70",
            AlphaValue::P75 => "75",
            AlphaValue::P80 => "80",
            AlphaValue::P85 => "85",
            AlphaValue::P90 => "90",
            AlphaValue::P95 => "95",
            AlphaValue::P100 => "100",
        }
    }
}

impl FromStr for AlphaValue {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        AlphaValue::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| StyleError::InvalidAlpha {
                value: s.to_string(),
            })
    }
}

impl TryFrom<&str> for AlphaValue {
    type Error = StyleError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for AlphaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RGB color with an alpha fraction, displayed as `rgba(r, g, b, a)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha as a fraction between 0 and 1.
    pub a: f64,
}

impl Rgba {
    /// Parses `#rgb` or `#rrggbb` (case-insensitive) with the given alpha.
    ///
    /// The short form expands each digit (`#fa0` is `#ffaa00`).
    pub fn from_hex(color: &str, a: f64) -> Result<Self> {
        let invalid = || StyleError::InvalidColor {
            value: color.to_string(),
        };
        let hex = color.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => Ok(Rgba {
                r: channel(&hex[0..1])? * 17,
                g: channel(&hex[1..2])? * 17,
                b: channel(&hex[2..3])? * 17,
                a,
            }),
            6 => Ok(Rgba {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a,
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Converts a hex color and opacity into a typed [`Rgba`].
///
/// # Errors
///
/// Returns [`StyleError::InvalidColor`] unless `color` is `#rgb` or `#rrggbb`.
pub fn try_alpha(color: &str, opacity: AlphaValue) -> Result<Rgba> {
    Rgba::from_hex(color, opacity.fraction())
}

/// Converts a hex color and opacity into an `rgba(...)` string.
///
/// Invalid colors are reported through `tracing` at error level and yield
/// `None`.
///
/// # Example
///
/// ```rust
/// use varistyle::{alpha, AlphaValue};
///
/// assert_eq!(alpha("#000000", AlphaValue::P100).as_deref(), Some("rgba(0, 0, 0, 1)"));
/// assert_eq!(alpha("#ffffff", AlphaValue::P50).as_deref(), Some("rgba(255, 255, 255, 0.5)"));
/// assert_eq!(alpha("not-a-color", AlphaValue::P50), None);
/// ```
pub fn alpha(color: &str, opacity: AlphaValue) -> Option<String> {
    match try_alpha(color, opacity) {
        Ok(rgba) => Some(rgba.to_string()),
        Err(err) => {
            tracing::error!(color, opacity = opacity.as_str(), "{}", err);
            None
        }
    }
}
