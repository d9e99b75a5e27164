//! Palette engines: six named strategies from parameters to raw tokens.
//!
//! Each engine fixes the neutral colors (bg/surface/text/muted/border) per
//! theme, derives `primary` and `accent` from the user's primary color, pins
//! the semantic colors to its own constants, and derives `ring` from the
//! final primary. Engines never look at overrides and never enforce
//! contrast; both happen later in the pipeline.

use tint_color::Color;

use crate::params::{Harmony, Mood, Theme};
use crate::token::TokenSet;

const fn rgb(v: u32) -> Color {
    Color::from_rgb_u32(v)
}

const fn rgba(v: u32) -> Color {
    Color::from_rgba_u32(v)
}

/// A named palette strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Saturated brand colors; the only engine that reads mood itself.
    #[default]
    Bold,
    /// Muted, print-like primary and accent.
    Editorial,
    /// Translucent surfaces and borders, near-analogous accent.
    Neoglass,
    /// Low-saturation everything.
    Minimal,
    /// Brighter, more saturated brand colors.
    Playful,
    /// Always dark, with primary and accent pulled toward gold.
    ElegantDark,
}

impl Mode {
    pub const ALL: [Self; 6] = [
        Self::Bold, Self::Editorial, Self::Neoglass,
        Self::Minimal, Self::Playful, Self::ElegantDark,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Editorial => "editorial",
            Self::Neoglass => "neoglass",
            Self::Minimal => "minimal",
            Self::Playful => "playful",
            Self::ElegantDark => "elegant-dark",
        }
    }

    /// Parse a mode from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL.iter().find(|m| m.name() == lower).copied()
    }

    /// Unknown modes fall back to [`Mode::Bold`].
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(mode = name, "unrecognized mode, using bold");
            Self::Bold
        })
    }

    /// Run this engine.
    #[must_use]
    pub fn derive(self, primary: Color, theme: Theme, mood: Mood, harmony: Harmony) -> TokenSet {
        match self {
            Self::Bold => bold(primary, theme, mood, harmony),
            Self::Editorial => editorial(primary, theme, harmony),
            Self::Neoglass => neoglass(primary, theme),
            Self::Minimal => minimal(primary, theme, harmony),
            Self::Playful => playful(primary, theme, harmony),
            Self::ElegantDark => elegant_dark(primary),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared building blocks
// ---------------------------------------------------------------------------

/// The theme-fixed half of a palette.
#[derive(Clone, Copy)]
struct Neutrals {
    bg: Color,
    surface: Color,
    text: Color,
    muted: Color,
    border: Color,
}

/// The engine-fixed semantic colors.
#[derive(Clone, Copy)]
struct Semantic {
    success: Color,
    warn: Color,
    danger: Color,
}

const fn assemble(n: Neutrals, primary: Color, accent: Color, s: Semantic, ring: Color) -> TokenSet {
    TokenSet {
        bg: n.bg,
        surface: n.surface,
        text: n.text,
        muted: n.muted,
        primary,
        accent,
        success: s.success,
        warn: s.warn,
        danger: s.danger,
        border: n.border,
        ring,
    }
}

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

fn bold(primary: Color, theme: Theme, mood: Mood, harmony: Harmony) -> TokenSet {
    let n = theme.pick(
        Neutrals {
            bg: rgb(0x0b1020),
            surface: rgb(0x121826),
            text: rgb(0xe6edf3),
            muted: rgb(0x9aa5b1),
            border: rgb(0x2b3546),
        },
        Neutrals {
            bg: rgb(0xf8fafc),
            surface: rgb(0xffffff),
            text: rgb(0x0f172a),
            muted: rgb(0x64748b),
            border: rgb(0xe2e8f0),
        },
    );

    let punch = mood.punch();
    let accent = harmony.accent_for(primary).saturate(punch * 16.0);
    let primary = primary.saturate(punch * 20.0);
    let ring = primary.lighten(theme.pick(10.0, -10.0));

    let semantic = Semantic {
        success: rgb(0x10b981),
        warn: rgb(0xf59e0b),
        danger: rgb(0xef4444),
    };
    assemble(n, primary, accent, semantic, ring)
}

fn editorial(primary: Color, theme: Theme, harmony: Harmony) -> TokenSet {
    let n = theme.pick(
        Neutrals {
            bg: rgb(0x0a0f1a),
            surface: rgb(0x0f1624),
            text: rgb(0xe7ecf5),
            muted: rgb(0x9aa5b1),
            border: rgb(0x273042),
        },
        Neutrals {
            bg: rgb(0xf6f7fb),
            surface: rgb(0xffffff),
            text: rgb(0x111827),
            muted: rgb(0x6b7280),
            border: rgb(0xe5e7eb),
        },
    );

    let accent = harmony.accent_for(primary).desaturate_to(22.0);
    let primary = primary.desaturate_to(30.0);
    let ring = primary.lighten(theme.pick(12.0, -12.0));

    let semantic = Semantic {
        success: rgb(0x22c55e),
        warn: rgb(0xeab308),
        danger: rgb(0xf43f5e),
    };
    assemble(n, primary, accent, semantic, ring)
}

/// Glass surfaces carry alpha. The accent is a fixed 18° turn and ignores
/// the harmony parameter.
fn neoglass(primary: Color, theme: Theme) -> TokenSet {
    let n = theme.pick(
        Neutrals {
            bg: rgb(0x0b0f19),
            surface: rgba(0x0f1626b3),
            text: rgb(0xe6eef7),
            muted: rgb(0x9fb0c2),
            border: rgba(0x2b3750cc),
        },
        Neutrals {
            bg: rgb(0xeef2ff),
            surface: rgba(0xffffffcc),
            text: rgb(0x0f172a),
            muted: rgb(0x475569),
            border: rgb(0xc7d2fe),
        },
    );

    let accent = primary.rotate_hue(18.0);
    let primary = primary.lighten(theme.pick(8.0, -4.0));
    let ring = primary.lighten(theme.pick(10.0, -10.0));

    let semantic = Semantic {
        success: rgb(0x34d399),
        warn: rgb(0xf59e0b),
        danger: rgb(0xef4444),
    };
    assemble(n, primary, accent, semantic, ring)
}

fn minimal(primary: Color, theme: Theme, harmony: Harmony) -> TokenSet {
    let n = theme.pick(
        Neutrals {
            bg: rgb(0x0e141f),
            surface: rgb(0x101725),
            text: rgb(0xe8eef4),
            muted: rgb(0x8f9aa7),
            border: rgb(0x233047),
        },
        Neutrals {
            bg: rgb(0xf9fafb),
            surface: rgb(0xffffff),
            text: rgb(0x0b1220),
            muted: rgb(0x6b7280),
            border: rgb(0xe5e7eb),
        },
    );

    let accent = harmony.accent_for(primary).desaturate_to(20.0);
    let primary = primary.desaturate_to(24.0);
    let ring = primary.lighten(theme.pick(10.0, -10.0));

    let semantic = Semantic {
        success: rgb(0x16a34a),
        warn: rgb(0xd97706),
        danger: rgb(0xdc2626),
    };
    assemble(n, primary, accent, semantic, ring)
}

fn playful(primary: Color, theme: Theme, harmony: Harmony) -> TokenSet {
    let n = theme.pick(
        Neutrals {
            bg: rgb(0x0b1223),
            surface: rgb(0x0f1830),
            text: rgb(0xe8f0ff),
            muted: rgb(0x96a8c2),
            border: rgb(0x233053),
        },
        Neutrals {
            bg: rgb(0xf7fbff),
            surface: rgb(0xffffff),
            text: rgb(0x0b1220),
            muted: rgb(0x4b5563),
            border: rgb(0xdbeafe),
        },
    );

    let accent = harmony.accent_for(primary).saturate(18.0);
    let primary = primary.lighten(theme.pick(4.0, -2.0)).saturate(16.0);
    let ring = primary.lighten(theme.pick(12.0, -12.0));

    let semantic = Semantic {
        success: rgb(0x22c55e),
        warn: rgb(0xf59e0b),
        danger: rgb(0xef4444),
    };
    assemble(n, primary, accent, semantic, ring)
}

/// Ignores both theme and harmony.
fn elegant_dark(primary: Color) -> TokenSet {
    let n = Neutrals {
        bg: rgb(0x0a0c12),
        surface: rgb(0x0f1320),
        text: rgb(0xe8ecf3),
        muted: rgb(0x99a2b3),
        border: rgb(0x212637),
    };

    let accent = primary.rotate_hue(-22.0).to_goldish();
    let primary = primary.to_goldish();
    let ring = primary.lighten(12.0);

    let semantic = Semantic {
        success: rgb(0x22c55e),
        warn: rgb(0xeab308),
        danger: rgb(0xf87171),
    };
    assemble(n, primary, accent, semantic, ring)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
