//! Accessibility guardrails.
//!
//! Two automatic repairs run on every derivation, between the mood
//! post-processor and the override merge:
//!
//! 1. [`guard_text_contrast`]: one 6-point nudge of text or background when
//!    body text falls below AA.
//! 2. [`guard_primary_button`]: darken `primary` in 4-point steps, at most
//!    8 times, so white button labels stay readable. Best effort: the cap can
//!    run out before AA is reached (a white primary ends at `#afafaf`).
//!
//! [`make_accessible`] is the stronger, on-demand repair of a rendered token
//! set. It walks text and background apart in 2-point steps and always
//! terminates, even when both colors start at a lightness extreme.

use tint_color::Color;

use crate::contrast::{AA_NORMAL, contrast_ratio, relative_luminance};
use crate::token::{TokenName, TokenSet};

/// Lightness step of the automatic text/background repair.
pub const TEXT_STEP: f64 = 6.0;

/// Lightness step of the primary-button repair.
pub const BUTTON_STEP: f64 = 4.0;

/// Attempts the primary-button repair may spend.
pub const BUTTON_MAX_ATTEMPTS: u32 = 8;

/// Lightness step of [`make_accessible`].
pub const ACCESSIBLE_STEP: f64 = 2.0;

/// Hard bound on [`make_accessible`] iterations. Two 2-point walks across
/// the full lightness range need at most 100 steps.
pub const MAX_ACCESSIBLE_STEPS: u32 = 100;

/// What a repair loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOutcome {
    /// Adjustments applied.
    pub steps: u32,
    /// Whether the pair reached [`AA_NORMAL`].
    pub met: bool,
}

/// Single-step text/background repair.
///
/// If text is the darker of the pair it is darkened, otherwise the
/// background is lightened. Returns `true` if a token changed.
pub fn guard_text_contrast(tokens: &mut TokenSet) -> bool {
    if contrast_ratio(tokens.text, tokens.bg) >= AA_NORMAL {
        return false;
    }
    if relative_luminance(tokens.text) < relative_luminance(tokens.bg) {
        tokens.text = tokens.text.lighten(-TEXT_STEP);
    } else {
        tokens.bg = tokens.bg.lighten(TEXT_STEP);
    }
    tracing::debug!(text = %tokens.text, bg = %tokens.bg, "text contrast below AA, nudged");
    true
}

/// Darken `primary` until white text on it reaches AA or attempts run out.
pub fn guard_primary_button(tokens: &mut TokenSet) -> GuardOutcome {
    let mut steps = 0;
    while contrast_ratio(Color::WHITE, tokens.primary) < AA_NORMAL && steps < BUTTON_MAX_ATTEMPTS {
        tokens.primary = tokens.primary.lighten(-BUTTON_STEP);
        steps += 1;
    }
    let met = contrast_ratio(Color::WHITE, tokens.primary) >= AA_NORMAL;
    if !met {
        tracing::debug!(primary = %tokens.primary, steps, "primary button still below AA after cap");
    }
    GuardOutcome { steps, met }
}

/// Run both automatic guardrails in order.
pub fn apply_guardrails(tokens: &mut TokenSet) -> GuardOutcome {
    guard_text_contrast(tokens);
    guard_primary_button(tokens)
}

/// Push text and background apart until they reach AA.
///
/// Each step darkens whichever of the two is darker. Once that side is
/// pinned at black, the lighter side is lightened instead. The loop stops
/// when AA is met, when neither side can move, or after
/// [`MAX_ACCESSIBLE_STEPS`].
pub fn make_accessible(tokens: &mut TokenSet) -> GuardOutcome {
    let mut steps = 0;
    while contrast_ratio(tokens.text, tokens.bg) < AA_NORMAL {
        if steps == MAX_ACCESSIBLE_STEPS {
            tracing::warn!(steps, "make_accessible hit its step cap");
            return GuardOutcome { steps, met: false };
        }

        let (darker, lighter) = if relative_luminance(tokens.text) < relative_luminance(tokens.bg) {
            (TokenName::Text, TokenName::Bg)
        } else {
            (TokenName::Bg, TokenName::Text)
        };

        if !nudge(tokens, darker, -ACCESSIBLE_STEP) && !nudge(tokens, lighter, ACCESSIBLE_STEP) {
            tracing::warn!(text = %tokens.text, bg = %tokens.bg, "text and background cannot separate further");
            return GuardOutcome { steps, met: false };
        }
        steps += 1;
    }
    tracing::debug!(steps, "text/background meet AA");
    GuardOutcome { steps, met: true }
}

/// Shift one token's lightness. Returns `false` if it was already clamped.
fn nudge(tokens: &mut TokenSet, name: TokenName, amount: f64) -> bool {
    let current = tokens.get(name);
    let moved = current.lighten(amount);
    if moved == current {
        return false;
    }
    tokens.set(name, moved);
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::engine::Mode;
    use crate::params::{Harmony, Mood, Theme};

    fn tokens_with(text: Color, bg: Color) -> TokenSet {
        TokenSet {
            text,
            bg,
            ..Mode::Bold.derive(Color::FALLBACK, Theme::Dark, Mood::NEUTRAL, Harmony::Complementary)
        }
    }

    // ── guard_text_contrast ─────────────────────────────────────────

    #[test]
    fn readable_pair_untouched() {
        let mut t = tokens_with(Color::from_rgb_u32(0xe6edf3), Color::from_rgb_u32(0x0b1020));
        let before = t;
        assert!(!guard_text_contrast(&mut t));
        assert_eq!(t, before);
    }

    #[test]
    fn darker_text_is_darkened_once() {
        let text = Color::from_rgb_u32(0x777777);
        let mut t = tokens_with(text, Color::from_rgb_u32(0x999999));
        assert!(guard_text_contrast(&mut t));
        assert_eq!(t.text, text.lighten(-TEXT_STEP));
        assert_eq!(t.bg.to_hex(), "#999999");
    }

    #[test]
    fn lighter_text_lightens_background_once() {
        let bg = Color::from_rgb_u32(0x777777);
        let mut t = tokens_with(Color::from_rgb_u32(0x999999), bg);
        assert!(guard_text_contrast(&mut t));
        assert_eq!(t.bg, bg.lighten(TEXT_STEP));
        assert_eq!(t.text.to_hex(), "#999999");
    }

    // ── guard_primary_button ────────────────────────────────────────

    #[test]
    fn dark_primary_needs_no_attempts() {
        let mut t = tokens_with(Color::WHITE, Color::BLACK);
        t.primary = Color::from_rgb_u32(0x4f46e5);
        let outcome = guard_primary_button(&mut t);
        assert_eq!(outcome, GuardOutcome { steps: 0, met: true });
        assert_eq!(t.primary.to_hex(), "#4f46e5");
    }

    #[test]
    fn light_primary_darkens_until_readable() {
        let mut t = tokens_with(Color::WHITE, Color::BLACK);
        t.primary = Color::from_rgb_u32(0x60a5fa);
        let outcome = guard_primary_button(&mut t);
        assert!(outcome.met);
        assert!(outcome.steps > 0 && outcome.steps <= BUTTON_MAX_ATTEMPTS);
        assert!(contrast_ratio(Color::WHITE, t.primary) >= AA_NORMAL);
    }

    #[test]
    fn white_primary_exhausts_attempts() {
        let mut t = tokens_with(Color::WHITE, Color::BLACK);
        t.primary = Color::WHITE;
        let outcome = guard_primary_button(&mut t);
        assert_eq!(outcome, GuardOutcome { steps: BUTTON_MAX_ATTEMPTS, met: false });
        assert_eq!(t.primary.to_hex(), "#afafaf");
    }

    // ── make_accessible ─────────────────────────────────────────────

    #[test]
    fn make_accessible_reaches_aa() {
        let mut t = tokens_with(Color::from_rgb_u32(0x808080), Color::from_rgb_u32(0x909090));
        let outcome = make_accessible(&mut t);
        assert!(outcome.met);
        assert!(contrast_ratio(t.text, t.bg) >= AA_NORMAL);
    }

    #[test]
    fn make_accessible_terminates_on_identical_white() {
        let mut t = tokens_with(Color::WHITE, Color::WHITE);
        let outcome = make_accessible(&mut t);
        assert!(outcome.met);
        assert!(outcome.steps < MAX_ACCESSIBLE_STEPS);
        assert_eq!(t.text, Color::WHITE);
    }

    #[test]
    fn make_accessible_terminates_on_identical_black() {
        let mut t = tokens_with(Color::BLACK, Color::BLACK);
        let outcome = make_accessible(&mut t);
        assert!(outcome.met);
        assert_eq!(t.bg, Color::BLACK);
        assert!(contrast_ratio(t.text, t.bg) >= AA_NORMAL);
    }

    #[test]
    fn make_accessible_noop_when_already_readable() {
        let mut t = tokens_with(Color::WHITE, Color::BLACK);
        assert_eq!(make_accessible(&mut t), GuardOutcome { steps: 0, met: true });
    }

    #[test]
    fn apply_guardrails_runs_both_stages() {
        let mut t = tokens_with(Color::from_rgb_u32(0x777777), Color::from_rgb_u32(0x999999));
        t.primary = Color::WHITE;
        let outcome = apply_guardrails(&mut t);
        assert_eq!(t.text, Color::from_rgb_u32(0x777777).lighten(-TEXT_STEP));
        assert!(!outcome.met);
    }
}
