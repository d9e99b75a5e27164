//! Style parameters: everything a derivation depends on.
//!
//! All parameter types follow the same lenient parsing convention as the
//! color pipeline: `from_name` is strict and returns `Option`, while the
//! `*_or_default` / `*_lossy` variants map unknown input onto the fallback
//! the engines would pick anyway.

use tint_color::Color;

use crate::engine::Mode;

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Dark or light base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Dark, Self::Light];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Strict parse (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Engines only ask "is it dark?", so anything else is light.
    #[must_use]
    pub fn from_name_lossy(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme = name, "unrecognized theme, treating as light");
            Self::Light
        })
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Choose the dark or light variant of a value.
    #[inline]
    #[must_use]
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

// ---------------------------------------------------------------------------
// Harmony
// ---------------------------------------------------------------------------

/// How an accent hue is derived from the primary hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Harmony {
    /// Opposite side of the wheel (180°).
    #[default]
    Complementary,
    /// Close neighbor (24°).
    Analogous,
    /// Just short of the complement (150°).
    Split,
}

impl Harmony {
    pub const ALL: [Self; 3] = [Self::Complementary, Self::Analogous, Self::Split];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Split => "split",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL.iter().find(|h| h.name() == lower).copied()
    }

    /// Unknown harmonies behave as complementary.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(harmony = name, "unrecognized harmony, using complementary");
            Self::Complementary
        })
    }

    /// Hue rotation in degrees.
    #[must_use]
    pub const fn rotation(self) -> f64 {
        match self {
            Self::Complementary => 180.0,
            Self::Analogous => 24.0,
            Self::Split => 150.0,
        }
    }

    /// Derive the accent for `primary`.
    #[must_use]
    pub fn accent_for(self, primary: Color) -> Color {
        primary.rotate_hue(self.rotation())
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Mood slider position, 0–100. 50 is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mood(u8);

impl Mood {
    pub const NEUTRAL: Self = Self(50);
    pub const MAX: u8 = 100;

    /// Clamp any integer into the 0–100 range.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(u8::try_from(value.clamp(0, i64::from(Self::MAX))).unwrap_or(Self::MAX))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Distance from neutral, scaled into [-1, 1].
    #[must_use]
    pub fn punch(self) -> f64 {
        ((f64::from(self.0) - 50.0) / 50.0).clamp(-1.0, 1.0)
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

// ---------------------------------------------------------------------------
// StyleParams
// ---------------------------------------------------------------------------

/// The full input of one derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleParams {
    pub primary: Color,
    pub theme: Theme,
    pub mood: Mood,
    pub mode: Mode,
    pub harmony: Harmony,
}

impl Default for StyleParams {
    /// Indigo primary, dark, neutral mood, bold, complementary.
    fn default() -> Self {
        Self {
            primary: Color::FALLBACK,
            theme: Theme::Dark,
            mood: Mood::NEUTRAL,
            mode: Mode::Bold,
            harmony: Harmony::Complementary,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
