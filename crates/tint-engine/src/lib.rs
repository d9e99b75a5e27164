//! # tint-engine: design tokens from a single color
//!
//! Turns a primary color plus a handful of style controls into eleven
//! coherent design tokens, keeps them readable, and lets the user pin any
//! token by hand.
//!
//! # Architecture
//!
//! ```text
//! StyleParams (primary, theme, mood, mode, harmony)
//!     │
//!     ▼
//! engine.rs:    one of six palette strategies builds raw tokens
//!     │
//!     ▼
//! mood.rs:      nudge brand saturation by the mood punch
//!     │
//!     ▼
//! guardrail.rs: text/background nudge, primary-button darkening
//!     │
//!     ▼
//! overrides.rs: user-picked tokens win
//!     │
//!     ▼
//! export.rs:    CSS variables, JSON, share query
//! ```
//!
//! [`Session`] wraps the pipeline as mutable state for a front end, and
//! [`Config`] reads defaults from `tint.toml`.
//!
//! # Leniency
//!
//! Derivation never fails. Malformed colors fall back to `#4f46e5` and
//! unknown names fall back to each parameter's default. Typed errors only
//! appear at the edges: override assignments, config files, and JSON.

// Hex color literals read best unseparated.
#![allow(clippy::unreadable_literal)]
// Color math uses small integer-to-float casts.
#![allow(clippy::cast_precision_loss)]
// Engine and test tables are long by nature.
#![allow(clippy::too_many_lines)]
// Modules re-export under their own names (contrast::contrast_report).
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod contrast;
pub mod derive;
pub mod engine;
pub mod error;
pub mod export;
pub mod guardrail;
pub mod mood;
pub mod overrides;
pub mod params;
pub mod session;
pub mod token;

pub use config::Config;
pub use contrast::{ContrastCheck, ContrastGrade, contrast_ratio, contrast_report, relative_luminance};
pub use derive::{derive, derive_raw};
pub use engine::Mode;
pub use error::{Result, TintError};
pub use export::{QueryParams, share_query, share_url, to_css, to_json};
pub use guardrail::{GuardOutcome, make_accessible};
pub use overrides::{Override, Overrides};
pub use params::{Harmony, Mood, StyleParams, Theme};
pub use session::Session;
pub use token::{TokenName, TokenSet};
pub use tint_color::Color;
