// SPDX-License-Identifier: MIT
//
// tint-color: the color math underneath tint.
//
// Everything here is plain sRGB: 8-bit channels, an optional alpha byte,
// and a cylindrical HSL view used for the lightness / saturation / hue
// transforms the palette engines are built from.
//
// Conversion pipeline:
//
//   "#rrggbb[aa]" ↔ Color (u8 channels) ↔ (f64 channels) ↔ Hsl
//
// Every transform goes through the full pipeline and re-quantizes to 8-bit
// channels on the way out, so results are always representable as hex.

// Hex color literals read best unseparated.
#![allow(clippy::unreadable_literal)]

pub mod color;
pub mod hsl;

pub use color::{Color, ParseColorError, normalize_hex_input};
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
