//! The derivation pipeline.
//!
//! ```text
//! StyleParams ──▶ engine ──▶ apply_mood ──▶ guardrails ──▶ Overrides::merge ──▶ TokenSet
//! ```

use crate::guardrail::apply_guardrails;
use crate::mood::apply_mood;
use crate::overrides::Overrides;
use crate::params::StyleParams;
use crate::token::TokenSet;

/// Derive tokens from parameters alone (no overrides).
///
/// Pure: equal parameters always give equal tokens.
#[must_use]
pub fn derive_raw(params: StyleParams) -> TokenSet {
    let StyleParams { primary, theme, mood, mode, harmony } = params;
    tracing::debug!(
        primary = %primary,
        theme = theme.name(),
        mood = mood.value(),
        mode = mode.name(),
        harmony = harmony.name(),
        "deriving tokens"
    );

    let tokens = mode.derive(primary, theme, mood, harmony);
    let mut tokens = apply_mood(tokens, mood);
    apply_guardrails(&mut tokens);
    tokens
}

/// Derive tokens and lay `overrides` over the result.
#[must_use]
pub fn derive(params: StyleParams, overrides: &Overrides) -> TokenSet {
    overrides.merge(&derive_raw(params))
}
