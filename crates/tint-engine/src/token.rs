//! Token names and the complete token set.
//!
//! A [`TokenSet`] always carries all eleven tokens. Engines build one from
//! scratch; every later stage (mood, guardrails, overrides) edits values in
//! place and can never add or drop a key.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tint_color::Color;

use crate::error::TintError;

/// One of the eleven design tokens, in canonical export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenName {
    Bg,
    Surface,
    Text,
    Muted,
    Primary,
    Accent,
    Success,
    Warn,
    Danger,
    Border,
    Ring,
}

impl TokenName {
    /// Every token, in the order exports list them.
    pub const ALL: [Self; 11] = [
        Self::Bg, Self::Surface, Self::Text, Self::Muted,
        Self::Primary, Self::Accent,
        Self::Success, Self::Warn, Self::Danger,
        Self::Border, Self::Ring,
    ];

    /// The token's key as used in CSS variables, JSON and overrides.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Surface => "surface",
            Self::Text => "text",
            Self::Muted => "muted",
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Danger => "danger",
            Self::Border => "border",
            Self::Ring => "ring",
        }
    }

    /// Parse a token from its key (case-insensitive, surrounding space ignored).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL.iter().find(|t| t.name() == lower).copied()
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenName {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TintError::UnknownToken(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TokenSet
// ---------------------------------------------------------------------------

/// A complete set of design tokens.
///
/// Serializes as a JSON object with keys in [`TokenName::ALL`] order and
/// hex string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenSet {
    // ── Surfaces ──────────────────────────────────────────────
    /// Page background.
    pub bg: Color,
    /// Cards and panels. May carry alpha (glass engines).
    pub surface: Color,

    // ── Text ──────────────────────────────────────────────────
    pub text: Color,
    /// Secondary text.
    pub muted: Color,

    // ── Brand ─────────────────────────────────────────────────
    /// Button fill and main brand color.
    pub primary: Color,
    /// Harmony-derived companion of `primary`.
    pub accent: Color,

    // ── Semantic (fixed per engine) ───────────────────────────
    pub success: Color,
    pub warn: Color,
    pub danger: Color,

    // ── Outlines ──────────────────────────────────────────────
    pub border: Color,
    /// Focus ring.
    pub ring: Color,
}

impl TokenSet {
    /// Read one token.
    #[must_use]
    pub const fn get(&self, name: TokenName) -> Color {
        match name {
            TokenName::Bg => self.bg,
            TokenName::Surface => self.surface,
            TokenName::Text => self.text,
            TokenName::Muted => self.muted,
            TokenName::Primary => self.primary,
            TokenName::Accent => self.accent,
            TokenName::Success => self.success,
            TokenName::Warn => self.warn,
            TokenName::Danger => self.danger,
            TokenName::Border => self.border,
            TokenName::Ring => self.ring,
        }
    }

    /// Replace one token, returning the previous value.
    pub fn set(&mut self, name: TokenName, color: Color) -> Color {
        let slot = match name {
            TokenName::Bg => &mut self.bg,
            TokenName::Surface => &mut self.surface,
            TokenName::Text => &mut self.text,
            TokenName::Muted => &mut self.muted,
            TokenName::Primary => &mut self.primary,
            TokenName::Accent => &mut self.accent,
            TokenName::Success => &mut self.success,
            TokenName::Warn => &mut self.warn,
            TokenName::Danger => &mut self.danger,
            TokenName::Border => &mut self.border,
            TokenName::Ring => &mut self.ring,
        };
        std::mem::replace(slot, color)
    }

    /// All tokens as `(name, color)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenName, Color)> + '_ {
        TokenName::ALL.iter().map(move |&name| (name, self.get(name)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
