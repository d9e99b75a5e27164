//! WCAG contrast math and the pass/warn/fail report.
//!
//! Luminance is computed from the RGB channels only; a token's alpha byte
//! does not take part.

use tint_color::Color;

use crate::token::TokenSet;

/// WCAG AA for normal text.
pub const AA_NORMAL: f64 = 4.5;

/// WCAG AA for large text; below this a pair is a failure.
pub const AA_LARGE: f64 = 3.0;

/// One sRGB channel (0.0–1.0) back to linear light.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG luminance of a token, 0 for black up to 1 for white.
///
/// Channels at or below the 0.03928 knee are scaled linearly, brighter ones
/// take the 2.4 gamma curve, and the three are weighted 0.2126 / 0.7152 /
/// 0.0722. A glass token's alpha byte is not part of the sum, so a
/// translucent surface scores as its opaque RGB.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.channels();
    let [r, g, b] = [r, g, b].map(|c| srgb_to_linear(c / 255.0));
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Contrast between two tokens, from 1 (identical) to 21 (black on white).
///
/// Order does not matter: the brighter luminance always goes on top of
/// `(hi + 0.05) / (lo + 0.05)`.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Classification of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastGrade {
    /// At least 4.5.
    Pass,
    /// At least 3.0.
    Warn,
    Fail,
}

impl ContrastGrade {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AA_NORMAL {
            Self::Pass
        } else if ratio >= AA_LARGE {
            Self::Warn
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }
}

/// One checked foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    pub label: &'static str,
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub grade: ContrastGrade,
}

impl ContrastCheck {
    #[must_use]
    pub fn new(label: &'static str, foreground: Color, background: Color) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self { label, foreground, background, ratio, grade: ContrastGrade::from_ratio(ratio) }
    }
}

/// Check the four pairs a rendered token set is judged by.
#[must_use]
pub fn contrast_report(tokens: &TokenSet) -> [ContrastCheck; 4] {
    [
        ContrastCheck::new("Text on Background", tokens.text, tokens.bg),
        ContrastCheck::new("Text on Surface", tokens.text, tokens.surface),
        ContrastCheck::new("Primary Button", Color::WHITE, tokens.primary),
        ContrastCheck::new("Outline Button", tokens.text, tokens.surface),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
