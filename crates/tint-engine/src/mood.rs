//! Mood post-processor.
//!
//! Runs after every engine so the mood slider always has a visible effect,
//! even for engines that never read mood themselves.

use crate::params::Mood;
use crate::token::TokenSet;

/// Saturation shift at full punch, in percentage points.
const PRIMARY_SWING: f64 = 10.0;
const ACCENT_SWING: f64 = 8.0;
const RING_SWING: f64 = 6.0;

/// Nudge the saturation of `primary`, `accent` and `ring` by the mood punch.
///
/// Neutral mood (punch exactly 0) returns the input untouched.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn apply_mood(tokens: TokenSet, mood: Mood) -> TokenSet {
    let punch = mood.punch();
    if punch == 0.0 {
        return tokens;
    }
    TokenSet {
        primary: tokens.primary.saturate(punch * PRIMARY_SWING),
        accent: tokens.accent.saturate(punch * ACCENT_SWING),
        ring: tokens.ring.saturate(punch * RING_SWING),
        ..tokens
    }
}
