// SPDX-License-Identifier: MIT
//
// RGB ↔ HSL conversion.
//
// Channels travel as f64 in the 0–255 range so intermediate results are not
// quantized until a Color is built from them. Hue is in degrees [0, 360),
// saturation and lightness are percentages [0, 100].

/// A color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0 to 360.0.
    pub h: f64,
    /// Saturation percentage, 0.0 to 100.0.
    pub s: f64,
    /// Lightness percentage, 0.0 to 100.0.
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Convert RGB channels (0–255) to HSL.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0.
#[must_use]
// max/min are always one of the three inputs, so exact comparison is sound.
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL to RGB channels (0–255, unrounded).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(hsl: Hsl) -> (f64, f64, f64) {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
