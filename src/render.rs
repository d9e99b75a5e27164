// SPDX-License-Identifier: MIT
//
// Terminal rendering of token tables and contrast reports.
//
// Swatches are two-space cells painted with a 24-bit background SGR. When
// stdout is not a terminal the swatch column is dropped and the tables are
// plain text.

use std::io::{self, Write};

use tint_color::Color;
use tint_engine::{ContrastCheck, ContrastGrade, StyleParams, TokenSet};

const SWATCH: &str = "    ";

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Set a 24-bit background color.
fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let Color { r, g, b, .. } = color;
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Set a 24-bit foreground color.
fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let Color { r, g, b, .. } = color;
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

fn swatch(w: &mut impl Write, color: Color) -> io::Result<()> {
    bg(w, color)?;
    w.write_all(SWATCH.as_bytes())?;
    reset(w)
}

// ─── Tables ──────────────────────────────────────────────────────────────────

/// One line per token: name, hex, and a swatch when `ansi` is on.
pub fn token_table(w: &mut impl Write, tokens: &TokenSet, ansi: bool) -> io::Result<()> {
    for (name, color) in tokens.iter() {
        write!(w, "{:<8} {:<9}", name.name(), color.to_hex())?;
        if ansi {
            w.write_all(b" ")?;
            swatch(w, color)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// The four contrast checks with ratio and grade. With `ansi` on, each
/// label is drawn in its own foreground over its own background.
pub fn contrast_table(w: &mut impl Write, report: &[ContrastCheck], ansi: bool) -> io::Result<()> {
    for check in report {
        if ansi {
            fg(w, check.foreground)?;
            bg(w, check.background)?;
            write!(w, " {:<18} ", check.label)?;
            reset(w)?;
        } else {
            write!(w, "{:<20}", check.label)?;
        }
        writeln!(w, " {:>6.2}  {}", check.ratio, grade_label(check.grade))?;
    }
    Ok(())
}

/// A single contrast measurement, as printed by `tint contrast`.
pub fn contrast_line(w: &mut impl Write, a: Color, b: Color, ratio: f64, grade: ContrastGrade) -> io::Result<()> {
    writeln!(w, "{a} on {b}: {ratio:.2} {}", grade_label(grade))
}

/// One-line summary of the parameters behind a table.
pub fn params_line(w: &mut impl Write, params: &StyleParams) -> io::Result<()> {
    writeln!(
        w,
        "primary {}  theme {}  mood {}  mode {}  harmony {}",
        params.primary,
        params.theme.name(),
        params.mood.value(),
        params.mode.name(),
        params.harmony.name(),
    )
}

const fn grade_label(grade: ContrastGrade) -> &'static str {
    match grade {
        ContrastGrade::Pass => "AA",
        ContrastGrade::Warn => "AA large",
        ContrastGrade::Fail => "fail",
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
