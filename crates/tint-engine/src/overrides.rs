//! Manual per-token overrides.
//!
//! Overrides are kept apart from derivation: the engine always produces the
//! full token set from parameters alone, and [`Overrides::merge`] lays the
//! user's picks over it as the very last step.

use std::collections::BTreeMap;
use std::str::FromStr;

use tint_color::Color;

use crate::error::TintError;
use crate::token::{TokenName, TokenSet};

/// Sparse `token -> color` map. Last write wins per token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides(BTreeMap<TokenName, Color>);

impl Overrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an override, returning the one it replaced.
    pub fn set(&mut self, name: TokenName, color: Color) -> Option<Color> {
        self.0.insert(name, color)
    }

    pub fn remove(&mut self, name: TokenName) -> Option<Color> {
        self.0.remove(&name)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, name: TokenName) -> Option<Color> {
        self.0.get(&name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overrides in canonical token order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenName, Color)> + '_ {
        self.0.iter().map(|(&name, &color)| (name, color))
    }

    /// Apply every override on top of `derived`.
    #[must_use]
    pub fn merge(&self, derived: &TokenSet) -> TokenSet {
        let mut merged = *derived;
        for (name, color) in self.iter() {
            merged.set(name, color);
        }
        merged
    }
}

impl FromIterator<(TokenName, Color)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (TokenName, Color)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(TokenName, Color)> for Overrides {
    fn extend<I: IntoIterator<Item = (TokenName, Color)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl Extend<Override> for Overrides {
    fn extend<I: IntoIterator<Item = Override>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|o| (o.name, o.color)));
    }
}

// ---------------------------------------------------------------------------
// Override assignment
// ---------------------------------------------------------------------------

/// A single `name=#rrggbb` assignment, as given on the command line.
///
/// Unlike the lenient color pipeline this parse is strict: an unknown token
/// or a malformed color is an error, not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    pub name: TokenName,
    pub color: Color,
}

impl FromStr for Override {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, color) = s.split_once('=').ok_or_else(|| TintError::InvalidOverride(s.to_string()))?;
        let name = name.parse::<TokenName>()?;
        let color = color.parse::<Color>()?;
        Ok(Self { name, color })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
