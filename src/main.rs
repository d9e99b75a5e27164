// SPDX-License-Identifier: MIT
//
// tint: derive accessible design tokens from a single color.
//
// This binary is a thin front end over tint-engine:
//
//   tint.toml [style]  ┐
//   --primary/--theme… ┴→ StyleParams ─┐
//   tint.toml [overrides] + --set ─────┴→ Session → table / CSS / JSON / share link
//
// Logs go to stderr so that exports on stdout can be piped.

mod render;

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tint_color::Color;
use tint_engine::config::StyleConfig;
use tint_engine::{Config, ContrastGrade, Override, Session, contrast_ratio, share_url};

/// Derive accessible design tokens from a single color
#[derive(Parser)]
#[command(name = "tint")]
#[command(version)]
#[command(about = "Derive accessible design tokens from a single color")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./tint.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive tokens and print them
    Derive {
        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Load parameters from a share query (e.g. "p=4f46e5&th=dark")
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Derive tokens, then push text and background apart until they pass AA
    Accessible {
        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        overrides: OverrideArgs,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Print the WCAG contrast ratio of two colors
    Contrast {
        /// Foreground color (#rrggbb)
        foreground: Color,
        /// Background color (#rrggbb)
        background: Color,
    },

    /// Print a share link for the current parameters
    Share {
        #[command(flatten)]
        style: StyleArgs,

        /// Base URL to append the query to; prints the bare query if omitted
        #[arg(long, value_name = "URL")]
        base: Option<String>,
    },

    /// Pick a random primary and random controls
    Random {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Write tokens to a file
    Export {
        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        overrides: OverrideArgs,

        #[arg(short, long, value_enum)]
        format: ExportFormat,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Style controls. Unset flags fall back to the config file, then defaults.
#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// Primary color (#rrggbb)
    #[arg(long)]
    primary: Option<String>,

    /// dark or light
    #[arg(long)]
    theme: Option<String>,

    /// Mood, 0 (muted) to 100 (punchy)
    #[arg(long, allow_negative_numbers = true)]
    mood: Option<i64>,

    /// bold, editorial, neoglass, minimal, playful or elegant-dark
    #[arg(long)]
    mode: Option<String>,

    /// complementary, analogous or split
    #[arg(long)]
    harmony: Option<String>,
}

impl StyleArgs {
    fn into_config(self) -> StyleConfig {
        StyleConfig {
            primary: self.primary,
            theme: self.theme,
            mood: self.mood,
            mode: self.mode,
            harmony: self.harmony,
        }
    }
}

#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Pin a token, e.g. --set accent=#ff00aa (repeatable)
    #[arg(long = "set", value_name = "NAME=#HEX")]
    set: Vec<Override>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Css,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    Css,
    Json,
}

impl From<ExportFormat> for Format {
    fn from(f: ExportFormat) -> Self {
        match f {
            ExportFormat::Css => Self::Css,
            ExportFormat::Json => Self::Json,
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Build a session from config, CLI style flags and `--set` assignments.
fn open_session(config: &Config, style: StyleArgs, overrides: OverrideArgs) -> Result<Session> {
    let params = config.style.clone().overlay(style.into_config()).to_params();
    let mut pinned = config.overrides().context("invalid [overrides] in config")?;
    pinned.extend(overrides.set);
    Ok(Session::with_overrides(params, pinned))
}

/// Render the session's tokens in `format`.
fn render_session(out: &mut impl Write, session: &Session, format: Format) -> Result<()> {
    match format {
        Format::Table => {
            let ansi = io::stdout().is_terminal();
            render::params_line(out, session.params())?;
            writeln!(out)?;
            render::token_table(out, session.tokens(), ansi)?;
            writeln!(out)?;
            render::contrast_table(out, &session.contrast_report(), ansi)?;
        }
        Format::Css => writeln!(out, "{}", session.css())?,
        Format::Json => writeln!(out, "{}", session.json()?)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config::discover(cli.config.as_deref()).context("failed to load config")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Derive { style, overrides, query, format } => {
            let mut session = open_session(&config, style, overrides)?;
            if let Some(query) = query {
                session.apply_query(&query);
            }
            render_session(&mut out, &session, format)?;
        }

        Commands::Accessible { style, overrides, format } => {
            let mut session = open_session(&config, style, overrides)?;
            let outcome = session.make_accessible();
            if outcome.met {
                tracing::info!(steps = outcome.steps, "text and background now pass AA");
            } else {
                eprintln!("warning: text and background could not reach AA after {} steps", outcome.steps);
            }
            render_session(&mut out, &session, format)?;
        }

        Commands::Contrast { foreground, background } => {
            let ratio = contrast_ratio(foreground, background);
            render::contrast_line(&mut out, foreground, background, ratio, ContrastGrade::from_ratio(ratio))?;
        }

        Commands::Share { style, base } => {
            let session = open_session(&config, style, OverrideArgs::default())?;
            match base {
                Some(base) => writeln!(out, "{}", share_url(&base, session.params()))?,
                None => writeln!(out, "{}", session.share_query())?,
            }
        }

        Commands::Random { seed, format } => {
            let mut session = Session::default();
            match seed {
                Some(seed) => session.randomize(&mut StdRng::seed_from_u64(seed)),
                None => session.randomize(&mut rand::thread_rng()),
            }
            tracing::info!(query = %session.share_query(), "randomized");
            render_session(&mut out, &session, format)?;
        }

        Commands::Export { style, overrides, format, output } => {
            let session = open_session(&config, style, overrides)?;
            let mut buf = Vec::new();
            render_session(&mut buf, &session, format.into())?;
            fs::write(&output, buf).with_context(|| format!("failed to write {}", output.display()))?;
            tracing::info!(path = %output.display(), "exported tokens");
        }
    }

    Ok(())
}
