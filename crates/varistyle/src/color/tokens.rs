//! Color token palettes.
//!
//! Each palette maps eleven shade keys (50, 100 … 900, 950) to a hex color.
//! Palettes are plain constants; [`palette`] looks one up by name.
//!
//! ```rust
//! use varistyle::tokens::{self, TokenColorKey};
//!
//! assert_eq!(&tokens::ZINC[TokenColorKey::S50], "#fafafa");
//! assert_eq!(tokens::palette("blue").and_then(|p| p.shade(500)), Some("#3b82f6"));
//! ```

use std::ops::Index;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Number of shades per palette.
pub const SHADE_COUNT: usize = 11;

/// A shade key, from lightest (`S50`) to darkest (`S950`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TokenColorKey {
    /// Shade 50.
    S50,
    /// Shade 100.
    S100,
    /// Shade 200.
    S200,
    /// Shade 300.
    S300,
    /// Shade 400.
    S400,
    /// Shade 500.
    S500,
    /// Shade 600.
    S600,
    /// Shade 700.
    S700,
    /// Shade 800.
    S800,
    /// Shade 900.
    S900,
    /// Shade 950.
    S950,
}

impl TokenColorKey {
    /// All keys, lightest first.
    pub const ALL: [TokenColorKey; SHADE_COUNT] = [
        TokenColorKey::S50,
        TokenColorKey::S100,
        TokenColorKey::S200,
        TokenColorKey::S300,
        TokenColorKey::S400,
        TokenColorKey::S500,
        TokenColorKey::S600,
        TokenColorKey::S700,
        TokenColorKey::S800,
        TokenColorKey::S900,
        TokenColorKey::S950,
    ];

    /// Returns the numeric shade (50, 100 … 950).
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Returns the key for a numeric shade.
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.value() == value)
    }
}

/// The eleven shades of one palette.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenColor {
    shades: [&'static str; SHADE_COUNT],
}

impl TokenColor {
    /// Creates a palette from shades ordered lightest first.
    pub const fn new(shades: [&'static str; SHADE_COUNT]) -> Self {
        Self { shades }
    }

    /// Returns the color for a key.
    pub const fn get(&self, key: TokenColorKey) -> &'static str {
        self.shades[key as usize]
    }

    /// Returns the color for a numeric shade, if it is one of the eleven keys.
    pub fn shade(&self, value: u16) -> Option<&'static str> {
        TokenColorKey::from_value(value).map(|key| self.get(key))
    }

    /// Iterates `(key, color)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (TokenColorKey, &'static str)> + '_ {
        TokenColorKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

impl Index<TokenColorKey> for TokenColor {
    type Output = str;

    fn index(&self, key: TokenColorKey) -> &str {
        self.shades[key as usize]
    }
}

/// The `zinc` palette. Cool gray with a faint blue cast.
pub const ZINC: TokenColor = TokenColor::new([
    "#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b",
    "#3f3f46", "#27272a", "#18181b", "#0f0f10",
]);

/// The `gray` palette. True neutral gray.
pub const GRAY: TokenColor = TokenColor::new([
    "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a1a1a1", "#737373", "#525252",
    "#404040", "#262626", "#171717", "#0a0a0a",
]);

/// The `slate` palette. Blue-tinted gray.
pub const SLATE: TokenColor = TokenColor::new([
    "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569",
    "#334155", "#1e293b", "#0f172a", "#0c111b",
]);

/// The `neutral` palette.
pub const NEUTRAL: TokenColor = TokenColor::new([
    "#fafafa", "#f5f5f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#737373", "#525252",
    "#404040", "#262626", "#171717", "#0a0a0a",
]);

/// The `stone` palette. Warm gray.
pub const STONE: TokenColor = TokenColor::new([
    "#fafaf9", "#f5f5f4", "#e7e5e4", "#d6d3d1", "#a8a29e", "#78716c", "#57534e",
    "#44403c", "#292524", "#1c1917", "#0d0a09",
]);

/// The `red` palette.
pub const RED: TokenColor = TokenColor::new([
    "#fef2f2", "#fee2e2", "#fca5a1", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d", "#650a0a", "#300000",
]);

/// The `orange` palette.
pub const ORANGE: TokenColor = TokenColor::new([
    "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c",
    "#c2410c", "#9a3412", "#7c2d12", "#450a0a",
]);

/// The `amber` palette.
pub const AMBER: TokenColor = TokenColor::new([
    "#fffbeb", "#fef3c7", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
    "#92400e", "#78350f", "#572e0c", "#3c210f",
]);

/// The `yellow` palette.
pub const YELLOW: TokenColor = TokenColor::new([
    "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04",
    "#a16207", "#854d0e", "#7f1d1d", "#8b6a3a",
]);

/// The `lime` palette.
pub const LIME: TokenColor = TokenColor::new([
    "#f7fee7", "#ecfccb", "#d9f99d", "#a8e6cf", "#6ee7b7", "#34d399", "#10b981",
    "#059669", "#047857", "#165e33", "#0d4b1f",
]);

/// The `green` palette.
pub const GREEN: TokenColor = TokenColor::new([
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a",
    "#15803d", "#166534", "#14532d", "#0f4c22",
]);

/// The `emerald` palette.
pub const EMERALD: TokenColor = TokenColor::new([
    "#ecfdf5", "#99f6e4", "#5eead4", "#34d399", "#0f766e", "#059669", "#047857",
    "#065f46", "#064e3b", "#064e3b", "#062e24",
]);

/// The `teal` palette.
pub const TEAL: TokenColor = TokenColor::new([
    "#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#28b8c8", "#0d9488", "#0f766e",
    "#115e59", "#134e4a", "#124c4c", "#083833",
]);

/// The `cyan` palette.
pub const CYAN: TokenColor = TokenColor::new([
    "#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0e7490",
    "#155e75", "#164e63", "#0e4e6f", "#0b292f",
]);

/// The `sky` palette.
pub const SKY: TokenColor = TokenColor::new([
    "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#06b6d4", "#0e7490",
    "#155e75", "#164e63", "#0e4e6f", "#0b292f",
]);

/// The `blue` palette.
pub const BLUE: TokenColor = TokenColor::new([
    "#eff6ff", "#dbEafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
    "#1d4ed8", "#1e40af", "#1e3a8a", "#0e1a4c",
]);

/// The `indigo` palette.
pub const INDIGO: TokenColor = TokenColor::new([
    "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5",
    "#4338ca", "#3730a3", "#312e81", "#1e1a78",
]);

/// The `violet` palette.
pub const VIOLET: TokenColor = TokenColor::new([
    "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed",
    "#6e40c9", "#5b21b6", "#4c1d95", "#3f1a83",
]);

/// The `purple` palette.
pub const PURPLE: TokenColor = TokenColor::new([
    "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea",
    "#7e22ce", "#6b21a8", "#581c87", "#4c1c76",
]);

/// The `fuchsia` palette.
pub const FUCHSIA: TokenColor = TokenColor::new([
    "#fdf4ff", "#fae8ff", "#f5d0fe", "#f0abfc", "#e879f9", "#d946ef", "#a21caf",
    "#86198f", "#701a75", "#5b21a8", "#4a1c8c",
]);

/// The `pink` palette.
pub const PINK: TokenColor = TokenColor::new([
    "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777",
    "#be185d", "#9d174d", "#831843", "#501b30",
]);

/// The `rose` palette.
pub const ROSE: TokenColor = TokenColor::new([
    "#fff1f2", "#ffe4e6", "#fecdd3", "#fda4af", "#fb7185", "#f43f5e", "#e11d48",
    "#be123c", "#9f1239", "#7a1a31", "#6b172d",
]);

static PALETTES: Lazy<IndexMap<&'static str, TokenColor>> = Lazy::new(|| {
    IndexMap::from([
        ("zinc", ZINC),
        ("gray", GRAY),
        ("slate", SLATE),
        ("neutral", NEUTRAL),
        ("stone", STONE),
        ("red", RED),
        ("orange", ORANGE),
        ("amber", AMBER),
        ("yellow", YELLOW),
        ("lime", LIME),
        ("green", GREEN),
        ("emerald", EMERALD),
        ("teal", TEAL),
        ("cyan", CYAN),
        ("sky", SKY),
        ("blue", BLUE),
        ("indigo", INDIGO),
        ("violet", VIOLET),
        ("purple", PURPLE),
        ("fuchsia", FUCHSIA),
        ("pink", PINK),
        ("rose", ROSE),
    ])
});

/// Looks up a palette by its lowercase name.
pub fn palette(name: &str) -> Option<&'static TokenColor> {
    PALETTES.get(name)
}

/// Iterates palette names in declaration order.
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    PALETTES.keys().copied()
}
