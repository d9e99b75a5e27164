//! Token export and share links.
//!
//! Exports are strings; writing them anywhere is the caller's business.

use std::fmt::Write as _;

use tint_color::{Color, normalize_hex_input};
use url::form_urlencoded;

use crate::engine::Mode;
use crate::error::Result;
use crate::params::{Harmony, Mood, StyleParams, Theme};
use crate::token::TokenSet;

/// Render tokens as a `:root` block of CSS custom properties.
#[must_use]
pub fn to_css(tokens: &TokenSet) -> String {
    let mut css = String::from(":root {\n");
    for (name, color) in tokens.iter() {
        let _ = writeln!(css, "  --{name}: {color};");
    }
    css.push('}');
    css
}

/// Render tokens as pretty-printed JSON (2-space indent, canonical key order).
pub fn to_json(tokens: &TokenSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

// ---------------------------------------------------------------------------
// Share query
// ---------------------------------------------------------------------------

/// Query keys of a share link.
mod key {
    pub const PRIMARY: &str = "p";
    pub const THEME: &str = "th";
    pub const MOOD: &str = "m";
    pub const MODE: &str = "md";
    pub const HARMONY: &str = "ha";
}

/// Encode the style parameters as `p=..&th=..&m=..&md=..&ha=..`.
///
/// The primary is written as six hex digits without `#`. Overrides are not
/// part of a share link.
#[must_use]
pub fn share_query(params: &StyleParams) -> String {
    let primary = params.primary.opaque().to_hex();
    form_urlencoded::Serializer::new(String::new())
        .append_pair(key::PRIMARY, primary.trim_start_matches('#'))
        .append_pair(key::THEME, params.theme.name())
        .append_pair(key::MOOD, &params.mood.value().to_string())
        .append_pair(key::MODE, params.mode.name())
        .append_pair(key::HARMONY, params.harmony.name())
        .finish()
}

/// Append [`share_query`] to `base`.
#[must_use]
pub fn share_url(base: &str, params: &StyleParams) -> String {
    let base = base.split(['?', '#']).next().unwrap_or(base);
    format!("{base}?{}", share_query(params))
}

/// Parameters read back from a share query. Absent keys stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub primary: Option<Color>,
    pub theme: Option<Theme>,
    pub mood: Option<Mood>,
    pub mode: Option<Mode>,
    pub harmony: Option<Harmony>,
}

impl QueryParams {
    /// Parse a query string. A leading `?` is ignored.
    ///
    /// Values are read leniently: a malformed primary becomes black, unknown
    /// names take each parameter's fallback, and a non-numeric mood is
    /// skipped.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut out = Self::default();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            match k.as_ref() {
                key::PRIMARY => out.primary = Some(normalize_hex_input(&v)),
                key::THEME => out.theme = Some(Theme::from_name_lossy(&v)),
                key::MOOD => match v.trim().parse::<i64>() {
                    Ok(n) => out.mood = Some(Mood::new(n)),
                    Err(_) => tracing::warn!(mood = %v, "ignoring non-numeric mood in query"),
                },
                key::MODE => out.mode = Some(Mode::from_name_or_default(&v)),
                key::HARMONY => out.harmony = Some(Harmony::from_name_or_default(&v)),
                other => tracing::trace!(key = other, "ignoring unknown query key"),
            }
        }
        out
    }

    /// Overwrite the fields of `params` that this query carries.
    pub fn apply_to(&self, params: &mut StyleParams) {
        if let Some(primary) = self.primary {
            params.primary = primary;
        }
        if let Some(theme) = self.theme {
            params.theme = theme;
        }
        if let Some(mood) = self.mood {
            params.mood = mood;
        }
        if let Some(mode) = self.mode {
            params.mode = mode;
        }
        if let Some(harmony) = self.harmony {
            params.harmony = harmony;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
