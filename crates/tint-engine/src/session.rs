//! Interactive session state.
//!
//! A [`Session`] owns the current parameters, the user's overrides and the
//! rendered tokens. Every mutation re-derives, so [`Session::tokens`] is
//! always in step with the inputs. The one exception is
//! [`Session::make_accessible`], whose repair lives in the rendered tokens
//! only and is replaced by the next derivation.

use rand::Rng;
use tint_color::{Color, Hsl};

use crate::contrast::{ContrastCheck, contrast_report};
use crate::derive::derive;
use crate::engine::Mode;
use crate::error::Result;
use crate::export::{QueryParams, share_query, to_css, to_json};
use crate::guardrail::{self, GuardOutcome};
use crate::overrides::Overrides;
use crate::params::{Harmony, Mood, StyleParams, Theme};
use crate::token::{TokenName, TokenSet};

/// Saturation and lightness ranges for a random primary.
const RANDOM_SATURATION: std::ops::Range<f64> = 55.0..80.0;
const RANDOM_LIGHTNESS: std::ops::Range<f64> = 50.0..60.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    params: StyleParams,
    overrides: Overrides,
    tokens: TokenSet,
}

impl Session {
    #[must_use]
    pub fn new(params: StyleParams) -> Self {
        Self::with_overrides(params, Overrides::new())
    }

    #[must_use]
    pub fn with_overrides(params: StyleParams, overrides: Overrides) -> Self {
        let tokens = derive(params, &overrides);
        Self { params, overrides, tokens }
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub const fn params(&self) -> &StyleParams {
        &self.params
    }

    #[must_use]
    pub const fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    #[must_use]
    pub const fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    // ── Control changes ─────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) {
        self.adopt_primary_override();
        self.params.theme = theme;
        self.refresh();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.adopt_primary_override();
        self.params.mode = mode;
        self.refresh();
    }

    pub fn set_harmony(&mut self, harmony: Harmony) {
        self.adopt_primary_override();
        self.params.harmony = harmony;
        self.refresh();
    }

    /// Moving the mood slider drops the `primary` and `accent` overrides so
    /// the change is visible on the brand colors.
    pub fn set_mood(&mut self, mood: Mood) {
        self.overrides.remove(TokenName::Primary);
        self.overrides.remove(TokenName::Accent);
        self.params.mood = mood;
        self.refresh();
    }

    pub fn set_primary(&mut self, primary: Color) {
        self.params.primary = primary;
        self.refresh();
    }

    // ── Overrides ───────────────────────────────────────────────────

    pub fn set_override(&mut self, name: TokenName, color: Color) {
        self.overrides.set(name, color);
        self.refresh();
    }

    pub fn remove_override(&mut self, name: TokenName) {
        if self.overrides.remove(name).is_some() {
            self.refresh();
        }
    }

    pub fn reset_overrides(&mut self) {
        self.overrides.clear();
        self.refresh();
    }

    // ── Bulk operations ─────────────────────────────────────────────

    /// Pick a random primary and random controls, clearing all overrides.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let hue = f64::from(rng.gen_range(0_u16..360));
        let primary = Color::from_hsl(Hsl::new(
            hue,
            rng.gen_range(RANDOM_SATURATION),
            rng.gen_range(RANDOM_LIGHTNESS),
        ));
        let theme = if rng.gen_bool(0.5) { Theme::Light } else { Theme::Dark };
        let mode = Mode::ALL[rng.gen_range(0..Mode::ALL.len())];
        let harmony = Harmony::ALL[rng.gen_range(0..Harmony::ALL.len())];
        let mood = Mood::new(rng.gen_range(0..=i64::from(Mood::MAX)));

        self.params = StyleParams { primary, theme, mood, mode, harmony };
        self.overrides.clear();
        self.refresh();
    }

    /// Repair text/background contrast in the rendered tokens.
    pub fn make_accessible(&mut self) -> GuardOutcome {
        let outcome = guardrail::make_accessible(&mut self.tokens);
        tracing::trace!(steps = outcome.steps, met = outcome.met, "make_accessible");
        outcome
    }

    /// Load parameters from a share query. A `p` key also drops the primary
    /// override so the shared palette shows through.
    pub fn apply_query(&mut self, query: &str) {
        let q = QueryParams::parse(query);
        if q.primary.is_some() {
            self.overrides.remove(TokenName::Primary);
        }
        q.apply_to(&mut self.params);
        self.refresh();
    }

    // ── Reports and exports ─────────────────────────────────────────

    #[must_use]
    pub fn contrast_report(&self) -> [ContrastCheck; 4] {
        contrast_report(&self.tokens)
    }

    #[must_use]
    pub fn css(&self) -> String {
        to_css(&self.tokens)
    }

    pub fn json(&self) -> Result<String> {
        to_json(&self.tokens)
    }

    #[must_use]
    pub fn share_query(&self) -> String {
        share_query(&self.params)
    }

    // ── Internals ───────────────────────────────────────────────────

    /// A user-picked primary becomes the base for the next derivation.
    fn adopt_primary_override(&mut self) {
        if let Some(primary) = self.overrides.get(TokenName::Primary) {
            self.params.primary = primary;
        }
    }

    fn refresh(&mut self) {
        self.tokens = derive(self.params, &self.overrides);
        tracing::trace!(overrides = self.overrides.len(), "session re-derived");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StyleParams::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
