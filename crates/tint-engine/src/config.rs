//! `tint.toml` loading.
//!
//! ```toml
//! [style]
//! primary = "#4f46e5"
//! theme = "dark"
//! mood = 50
//! mode = "bold"
//! harmony = "complementary"
//!
//! [overrides]
//! accent = "#ff00aa"
//! ```
//!
//! Every field is optional. Style values are read with the same leniency as
//! the rest of the pipeline; override entries are strict, since a typo there
//! would otherwise vanish silently.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tint_color::Color;

use crate::engine::Mode;
use crate::error::Result;
use crate::overrides::Overrides;
use crate::params::{Harmony, Mood, StyleParams, Theme};
use crate::token::TokenName;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "tint.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub style: StyleConfig,
    /// Token name to hex color.
    pub overrides: BTreeMap<String, String>,
}

/// Optional style parameters. Unset fields defer to whatever lies beneath.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmony: Option<String>,
}

impl StyleConfig {
    /// Layer `top` over `self`: fields set in `top` win.
    #[must_use]
    pub fn overlay(self, top: Self) -> Self {
        Self {
            primary: top.primary.or(self.primary),
            theme: top.theme.or(self.theme),
            mood: top.mood.or(self.mood),
            mode: top.mode.or(self.mode),
            harmony: top.harmony.or(self.harmony),
        }
    }

    /// Resolve into parameters, filling gaps from [`StyleParams::default`].
    #[must_use]
    pub fn to_params(&self) -> StyleParams {
        let defaults = StyleParams::default();
        StyleParams {
            primary: self.primary.as_deref().map_or(defaults.primary, Color::from_hex_lossy),
            theme: self.theme.as_deref().map_or(defaults.theme, Theme::from_name_lossy),
            mood: self.mood.map_or(defaults.mood, Mood::new),
            mode: self.mode.as_deref().map_or(defaults.mode, Mode::from_name_or_default),
            harmony: self.harmony.as_deref().map_or(defaults.harmony, Harmony::from_name_or_default),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::info!(path = %path.display(), overrides = config.overrides.len(), "loaded config");
        Ok(config)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `./tint.toml` is used if
    /// present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            Self::load(&local)
        } else {
            tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
            Ok(Self::default())
        }
    }

    #[must_use]
    pub fn style_params(&self) -> StyleParams {
        self.style.to_params()
    }

    /// Parse the `[overrides]` table. Unknown names and malformed colors are
    /// errors.
    pub fn overrides(&self) -> Result<Overrides> {
        self.overrides
            .iter()
            .map(|(name, color)| Ok((name.parse::<TokenName>()?, color.parse::<Color>()?)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
