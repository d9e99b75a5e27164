// SPDX-License-Identifier: MIT
//
// tint color type: 8-bit sRGB with optional alpha.
//
// Parsing is two-faced on purpose. `Color::hex` is strict and returns
// `None` for anything that is not 6 or 8 hex digits. `Color::from_hex_lossy`
// is the policy the derivation pipeline runs under: it reads 6 digits only,
// and anything else silently becomes `Color::FALLBACK`.
//
// All HSL transforms (lighten, saturate, rotate_hue, desaturate_to,
// to_goldish) convert to HSL, edit one component with clamping, convert
// back, and round each channel. Alpha rides along untouched.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels and an optional alpha byte.
///
/// Colors without alpha encode as `#rrggbb`, colors with alpha as
/// `#rrggbbaa`. Hex output is always lowercase.
///
/// # Examples
///
/// ```
/// use tint_color::Color;
///
/// let indigo = Color::hex("#4F46E5").unwrap();
/// assert_eq!(indigo.to_hex(), "#4f46e5");
///
/// let complement = indigo.rotate_hue(180.0);
/// let softer = indigo.desaturate_to(30.0);
/// assert_ne!(complement, softer);
///
/// // Malformed input never fails on the derivation path.
/// assert_eq!(Color::from_hex_lossy("not a color"), Color::FALLBACK);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// `None` means fully opaque and no alpha byte in the hex form.
    pub alpha: Option<u8>,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Create a color with an explicit alpha byte.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, alpha: Some(a) }
    }

    /// Create an opaque color from a packed `0xRRGGBB` literal.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_rgb_u32(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Create a color from a packed `0xRRGGBBAA` literal.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_rgba_u32(v: u32) -> Self {
        Self::rgba((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Build an opaque color from floating channels in the 0–255 range.
    ///
    /// Each channel is rounded, then clamped to [0, 255].
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Build an opaque color from HSL.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl);
        Self::from_channels(r, g, b)
    }

    /// Strictly parse `#rrggbb` or `#rrggbbaa` (`#` optional, any case).
    ///
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Parse an opaque `#rrggbb` color, substituting [`Color::FALLBACK`] for
    /// anything else.
    ///
    /// This is the leniency policy of the derivation pipeline: no input can
    /// make a derivation fail. An alpha byte is malformed here, since a base
    /// color must stay opaque.
    #[must_use]
    pub fn from_hex_lossy(s: &str) -> Self {
        parse_hex(s).filter(|c| c.alpha.is_none()).unwrap_or_else(|| {
            tracing::warn!(input = s, fallback = %Self::FALLBACK, "malformed hex color, using fallback");
            Self::FALLBACK
        })
    }

    /// Substituted for malformed hex input (`#4f46e5`).
    pub const FALLBACK: Self = Self::rgb(0x4f, 0x46, 0xe5);

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha byte (or none).
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: Option<u8>) -> Self {
        Self { alpha, ..self }
    }

    /// Return a copy with the alpha byte dropped.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(None)
    }

    // ─── Channel views ───────────────────────────────────────────────────

    /// Channels as floats in the 0–255 range.
    #[inline]
    #[must_use]
    pub fn channels(self) -> (f64, f64, f64) {
        (f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// The HSL view of this color (alpha ignored).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.channels();
        rgb_to_hsl(r, g, b)
    }

    // ─── HSL transforms ──────────────────────────────────────────────────

    /// Edit the HSL form and re-quantize, keeping alpha.
    #[must_use]
    pub fn map_hsl(self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        Self::from_hsl(f(self.to_hsl())).with_alpha(self.alpha)
    }

    /// Shift lightness by `amount` percentage points (negative darkens).
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl { l: (hsl.l + amount).clamp(0.0, 100.0), ..hsl })
    }

    /// Shift saturation by `amount` percentage points (negative mutes).
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl { s: (hsl.s + amount).clamp(0.0, 100.0), ..hsl })
    }

    /// Rotate the hue by `degrees`, wrapping into [0, 360).
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        self.map_hsl(|hsl| Hsl { h: (hsl.h + degrees).rem_euclid(360.0), ..hsl })
    }

    /// Set saturation to an absolute percentage (clamped).
    #[must_use]
    pub fn desaturate_to(self, target: f64) -> Self {
        self.map_hsl(|hsl| Hsl { s: target.clamp(0.0, 100.0), ..hsl })
    }

    /// Steer toward a warm, muted gold: hue 42°, saturation capped at 60,
    /// lightness capped at 70.
    #[must_use]
    pub fn to_goldish(self) -> Self {
        self.map_hsl(|hsl| Hsl {
            h: 42.0,
            s: hsl.s.mul_add(0.6, 18.0).clamp(0.0, 60.0),
            l: hsl.l.mul_add(0.9, 6.0).clamp(0.0, 70.0),
        })
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Hex string: `#rrggbb`, or `#rrggbbaa` when an alpha byte is present.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, alpha } = self;
        match alpha {
            None => format!("#{r:02x}{g:02x}{b:02x}"),
            Some(a) => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is the fallback indigo, matching lenient parsing.
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Error returned by strict hex parsing through [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {0:?}: expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s.trim()).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Color-picker normalization ──────────────────────────────────────────────

static PICKER_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{6})([0-9a-fA-F]{2})?$").expect("Invalid picker hex regex")
});

/// Normalize free-form input to an opaque `#rrggbb` color.
///
/// Six digits pass through, eight digits lose their alpha byte, anything
/// else (including surrounding garbage) becomes black. Used for values that
/// arrive from outside, such as a shared link's `p` parameter.
#[must_use]
pub fn normalize_hex_input(s: &str) -> Color {
    PICKER_HEX
        .captures(s.trim())
        .and_then(|caps| parse_hex(&caps[1]))
        .unwrap_or(Color::BLACK)
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        6 => Some(Color::rgb(
            parse_hex_byte(&bytes[0..2])?,
            parse_hex_byte(&bytes[2..4])?,
            parse_hex_byte(&bytes[4..6])?,
        )),
        8 => Some(Color::rgba(
            parse_hex_byte(&bytes[0..2])?,
            parse_hex_byte(&bytes[2..4])?,
            parse_hex_byte(&bytes[4..6])?,
            parse_hex_byte(&bytes[6..8])?,
        )),
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Round a 0–255 float channel and clamp it into a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#ff8000").unwrap();
        assert_eq!(color, Color::rgb(255, 128, 0));
        assert_eq!(color.alpha, None);
    }

    #[test]
    fn hex_parsing_is_case_insensitive() {
        assert_eq!(Color::hex("#4F46E5"), Color::hex("#4f46e5"));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Color::hex("00ff00"), Some(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::hex("#0f1626b3").unwrap();
        assert_eq!(color, Color::rgba(0x0f, 0x16, 0x26, 0xb3));
        assert_eq!(color.to_hex(), "#0f1626b3");
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("xyz").is_none());
        assert!(Color::hex("#12345").is_none());
        assert!(Color::hex("#fff").is_none());
        assert!(Color::hex("#gg0000").is_none());
        assert!(Color::hex("").is_none());
        assert!(Color::hex("#ééé").is_none());
    }

    #[test]
    fn lossy_parse_falls_back() {
        assert_eq!(Color::from_hex_lossy("garbage"), Color::FALLBACK);
        assert_eq!(Color::from_hex_lossy("#12345"), Color::FALLBACK);
        assert_eq!(Color::FALLBACK.to_hex(), "#4f46e5");
    }

    #[test]
    fn lossy_parse_rejects_alpha() {
        assert_eq!(Color::from_hex_lossy("#4f46e5cc"), Color::FALLBACK);
        assert_eq!(Color::from_hex_lossy("#12345600"), Color::FALLBACK);
        assert_eq!(Color::from_hex_lossy("0ea5e9"), Color::rgb(0x0e, 0xa5, 0xe9));
        // The strict parser still takes eight digits.
        assert_eq!(Color::hex("#4f46e5cc"), Some(Color::rgba(0x4f, 0x46, 0xe5, 0xcc)));
    }

    #[test]
    fn from_str_reports_input() {
        let err = "nope".parse::<Color>().unwrap_err();
        assert_eq!(err, ParseColorError("nope".to_string()));
        assert_eq!(" #ABCDEF ".parse::<Color>(), Ok(Color::rgb(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn hex_roundtrip() {
        for original in ["#c86432", "#000000", "#ffffff", "#0b1020", "#4f46e5"] {
            assert_eq!(Color::hex(original).unwrap().to_hex(), original);
        }
    }

    #[test]
    fn packed_literals() {
        assert_eq!(Color::from_rgb_u32(0x0b1020), Color::rgb(0x0b, 0x10, 0x20));
        assert_eq!(Color::from_rgba_u32(0x2b3750cc), Color::rgba(0x2b, 0x37, 0x50, 0xcc));
    }

    // ── Channel rounding ─────────────────────────────────────────────────

    #[test]
    fn channels_round_and_clamp() {
        assert_eq!(Color::from_channels(-20.0, 300.0, 127.5), Color::rgb(0, 255, 128));
        assert_eq!(Color::from_channels(0.49, 254.5, 10.4), Color::rgb(0, 255, 10));
    }

    // ── Transforms ───────────────────────────────────────────────────────

    #[test]
    fn lighten_increases_lightness() {
        let base = Color::hex("#336699").unwrap();
        assert!(base.lighten(10.0).to_hsl().l > base.to_hsl().l);
        assert!(base.lighten(-10.0).to_hsl().l < base.to_hsl().l);
    }

    #[test]
    fn lighten_clamps() {
        assert_eq!(Color::hex("#808080").unwrap().lighten(500.0), Color::WHITE);
        assert_eq!(Color::hex("#808080").unwrap().lighten(-500.0), Color::BLACK);
    }

    #[test]
    fn lighten_white_steps_down_by_four() {
        assert_eq!(Color::WHITE.lighten(-4.0).to_hex(), "#f5f5f5");
    }

    #[test]
    fn saturate_zero_is_identity() {
        let c = Color::hex("#4f46e5").unwrap();
        assert_eq!(c.saturate(0.0), c);
    }

    #[test]
    fn saturate_clamps_to_full() {
        let c = Color::hex("#806060").unwrap();
        assert!((c.saturate(200.0).to_hsl().s - 100.0).abs() < 1.0);
        assert_eq!(c.saturate(-200.0).to_hsl().s, 0.0);
    }

    #[test]
    fn rotate_hue_wraps() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.rotate_hue(120.0), Color::rgb(0, 255, 0));
        assert_eq!(red.rotate_hue(-120.0), Color::rgb(0, 0, 255));
        assert_eq!(red.rotate_hue(720.0), red);
        assert_eq!(red.rotate_hue(180.0), Color::rgb(0, 255, 255));
    }

    #[test]
    fn desaturate_to_sets_absolute_value() {
        let c = Color::hex("#4f46e5").unwrap().desaturate_to(30.0);
        assert!((c.to_hsl().s - 30.0).abs() < 1.5, "saturation: {}", c.to_hsl().s);
        let gray = Color::hex("#4f46e5").unwrap().desaturate_to(-5.0);
        assert_eq!(gray.to_hsl().s, 0.0);
    }

    #[test]
    fn goldish_is_warm_and_capped() {
        let gold = Color::rgb(0, 0, 255).to_goldish();
        let hsl = gold.to_hsl();
        assert!((hsl.h - 42.0).abs() < 2.0, "hue: {}", hsl.h);
        assert!(hsl.s <= 60.5, "saturation: {}", hsl.s);
        assert!(hsl.l <= 70.5, "lightness: {}", hsl.l);
        assert!(Color::WHITE.to_goldish().to_hsl().l <= 70.5);
    }

    #[test]
    fn transforms_keep_alpha() {
        let glass = Color::rgba(0x2b, 0x37, 0x50, 0xcc);
        assert_eq!(glass.lighten(10.0).alpha, Some(0xcc));
        assert_eq!(glass.rotate_hue(30.0).alpha, Some(0xcc));
    }

    // ── Normalization ────────────────────────────────────────────────────

    #[test]
    fn normalize_accepts_six_and_eight_digits() {
        assert_eq!(normalize_hex_input("4f46e5"), Color::rgb(0x4f, 0x46, 0xe5));
        assert_eq!(normalize_hex_input("#0f1626b3"), Color::rgb(0x0f, 0x16, 0x26));
    }

    #[test]
    fn normalize_rejects_to_black() {
        assert_eq!(normalize_hex_input("#abc"), Color::BLACK);
        assert_eq!(normalize_hex_input("red"), Color::BLACK);
        assert_eq!(normalize_hex_input(""), Color::BLACK);
    }

    // ── Formatting & serde ───────────────────────────────────────────────

    #[test]
    fn display_and_debug() {
        let c = Color::rgb(0x10, 0xb9, 0x81);
        assert_eq!(format!("{c}"), "#10b981");
        assert_eq!(format!("{c:?}"), "Color(#10b981)");
    }

    #[test]
    fn serde_as_hex_string() {
        let c = Color::rgba(1, 2, 3, 4);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#01020304\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Color>("\"#zzz\"").is_err());
    }
}
