// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Each outcome becomes one block framed by horizontal rules:
//!
//! ```text
//! ----------------------------------------------------
//! Pod web-7f - 1.25s
//! ----------------------------------------------------
//! Error executing command: stderr: permission denied
//! <captured stdout, possibly empty>
//! ```
//!
//! Success blocks omit the error line. Emphasis is expressed as a semantic
//! [`Style`]; the caller's [`Styler`] decides what that looks like.

use std::fmt::Write as _;

use crate::{format_duration, ExecutionOutcome, Report};

/// Horizontal rule between and inside blocks.
pub const DIVIDER: &str = "----------------------------------------------------";

/// Semantic emphasis applied to parts of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Divider,
    Label,
    Error,
}

crate::simple_display! {
    Style {
        Divider => "divider",
        Label => "label",
        Error => "error",
    }
}

/// Maps a [`Style`] onto concrete text, e.g. terminal escape sequences.
pub trait Styler {
    fn paint(&self, style: Style, text: &str) -> String;
}

/// Styler that leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Styler for Plain {
    fn paint(&self, _style: Style, text: &str) -> String {
        text.to_string()
    }
}

/// Render every outcome of `report` in order. An empty report renders as "".
pub fn render(report: &Report, styler: &impl Styler) -> String {
    let mut out = String::new();
    for outcome in report.entries() {
        render_block(&mut out, outcome, styler);
    }
    out
}

fn render_block(out: &mut String, outcome: &ExecutionOutcome, styler: &impl Styler) {
    let rule = styler.paint(Style::Divider, DIVIDER);
    // Writing into a String cannot fail
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "Pod {} - {}",
        styler.paint(Style::Label, outcome.name()),
        format_duration(outcome.elapsed)
    );
    let _ = writeln!(out, "{rule}");
    if let Some(failure) = &outcome.failure {
        let line = format!("Error executing command: {failure}");
        let _ = writeln!(out, "{}", styler.paint(Style::Error, &line));
    }
    out.push_str(&outcome.output);
    if !outcome.output.is_empty() && !outcome.output.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
