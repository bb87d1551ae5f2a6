//! Error types for style loading and color conversion.
//!
//! Variant resolution itself never fails: unknown groups and values are
//! skipped. Errors only come from parsing configuration, converting colors
//! and percentages, and from explicit validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading definitions or converting values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// YAML parse error.
    #[error("failed to parse {}: {message}", path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "definition".to_string()))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// File loading error.
    #[error("failed to load definition: {message}")]
    Load {
        /// Error message from the filesystem.
        message: String,
    },

    /// Color is not a `#rgb` or `#rrggbb` hex literal.
    #[error("invalid hex color '{value}' (expected #rgb or #rrggbb)")]
    InvalidColor {
        /// The rejected input.
        value: String,
    },

    /// Opacity key is not one of the supported steps.
    #[error("invalid alpha value '{value}' (expected 05..95 in steps of 5, or 100)")]
    InvalidAlpha {
        /// The rejected input.
        value: String,
    },

    /// Viewport percentage could not be parsed.
    #[error("invalid percentage '{value}'")]
    Percentage {
        /// The rejected input.
        value: String,
    },

    /// A default variant names a value its group does not define.
    #[error("default variant '{group}: {value}' does not exist")]
    UnknownDefault {
        /// Variant group name.
        group: String,
        /// The missing value key.
        value: String,
    },
}

/// Result type for fallible style operations.
pub type Result<T> = std::result::Result<T, StyleError>;
