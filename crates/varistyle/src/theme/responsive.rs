//! Viewport-relative units.
//!
//! Definitions often size things as a share of the screen. [`Viewport`]
//! converts a [`Percent`] of its width or height into device-independent
//! pixels, snapped to the nearest physical pixel for the viewport's pixel
//! ratio.

use std::str::FromStr;

use crate::error::StyleError;

/// A percentage of a viewport dimension.
///
/// Built from numbers (`50`, `12.5`) or strings (`"50%"`, `"50"`). Strings
/// are read like a leading decimal number; trailing text such as `%` is
/// ignored.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Percent(pub f64);

impl Percent {
    /// Returns the raw percentage value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Percent(value)
    }
}

impl From<f32> for Percent {
    fn from(value: f32) -> Self {
        Percent(value as f64)
    }
}

impl From<i32> for Percent {
    fn from(value: i32) -> Self {
        Percent(value as f64)
    }
}

impl From<u32> for Percent {
    fn from(value: u32) -> Self {
        Percent(value as f64)
    }
}

impl FromStr for Percent {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start();
        let end = leading_number_len(trimmed);
        trimmed[..end]
            .parse::<f64>()
            .map(Percent)
            .map_err(|_| StyleError::Percentage {
                value: s.to_string(),
            })
    }
}

impl TryFrom<&str> for Percent {
    type Error = StyleError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Length of the longest `[+-]digits[.digits]` prefix.
fn leading_number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    end
}

/// Screen dimensions used for percentage conversion.
///
/// # Example
///
/// ```rust
/// use varistyle::Viewport;
///
/// let phone = Viewport::new(390.0, 844.0).with_pixel_ratio(3.0);
/// assert_eq!(phone.width(50), 195.0);
/// assert_eq!(phone.height("25%".parse::<varistyle::Percent>().unwrap()), 211.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    pixel_ratio: f64,
}

impl Viewport {
    /// Creates a viewport with a pixel ratio of 1.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    /// Sets the physical pixels per device-independent pixel.
    ///
    /// Non-positive ratios are ignored.
    #[must_use]
    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        if ratio > 0.0 {
            self.pixel_ratio = ratio;
        }
        self
    }

    /// Returns the full viewport width.
    pub fn full_width(&self) -> f64 {
        self.width
    }

    /// Returns the full viewport height.
    pub fn full_height(&self) -> f64 {
        self.height
    }

    /// Returns the pixel ratio.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Converts a percentage of the width into pixels.
    pub fn width(&self, percent: impl Into<Percent>) -> f64 {
        self.round_to_pixel(self.width * percent.into().value() / 100.0)
    }

    /// Converts a percentage of the height into pixels.
    pub fn height(&self, percent: impl Into<Percent>) -> f64 {
        self.round_to_pixel(self.height * percent.into().value() / 100.0)
    }

    fn round_to_pixel(&self, size: f64) -> f64 {
        (size * self.pixel_ratio).round() / self.pixel_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_from_number() {
        assert_eq!(Percent::from(50).value(), 50.0);
        assert_eq!(Percent::from(12.5).value(), 12.5);
    }

    #[test]
    fn test_percent_parse_suffixed() {
        assert_eq!("50%".parse::<Percent>().unwrap(), Percent(50.0));
        assert_eq!(" 12.5%".parse::<Percent>().unwrap(), Percent(12.5));
        assert_eq!("-5".parse::<Percent>().unwrap(), Percent(-5.0));
    }

    #[test]
    fn test_percent_parse_rejects_non_numeric() {
        assert!(matches!(
            "wide".parse::<Percent>(),
            Err(StyleError::Percentage { .. })
        ));
        assert!("".parse::<Percent>().is_err());
        assert!(Percent::try_from("%").is_err());
    }

    #[test]
    fn test_width_and_height() {
        let viewport = Viewport::new(400.0, 800.0);
        assert_eq!(viewport.width(50), 200.0);
        assert_eq!(viewport.height(25), 200.0);
        assert_eq!(viewport.width(100), viewport.full_width());
    }

    #[test]
    fn test_rounds_to_nearest_physical_pixel() {
        let viewport = Viewport::new(101.0, 100.0).with_pixel_ratio(2.0);
        // 101 * 33 / 100 = 33.33 -> 66.66 physical -> 67 -> 33.5
        assert_eq!(viewport.width(33), 33.5);
    }

    #[test]
    fn test_non_positive_ratio_ignored() {
        let viewport = Viewport::new(100.0, 100.0).with_pixel_ratio(0.0);
        assert_eq!(viewport.pixel_ratio(), 1.0);
    }
}
