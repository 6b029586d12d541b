// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{AnsiColor, Color, Style as ClapStyle, Styles};
use podex_core::{Style, Styler};
use std::io::IsTerminal;

use crate::env;

pub mod codes {
    /// Horizontal rules between report blocks: bright yellow
    pub const DIVIDER: u8 = 93;
    /// Pod names: bright cyan
    pub const LABEL: u8 = 96;
    /// Per-pod error lines: bright red
    pub const ERROR: u8 = 91;
}

const RESET: &str = "\x1b[0m";

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Build clap `Styles` using the report palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(ClapStyle::new().fg_color(Some(Color::Ansi(AnsiColor::BrightYellow))))
        .usage(ClapStyle::new().fg_color(Some(Color::Ansi(AnsiColor::BrightYellow))))
        .literal(ClapStyle::new().fg_color(Some(Color::Ansi(AnsiColor::BrightCyan))))
        .error(ClapStyle::new().fg_color(Some(Color::Ansi(AnsiColor::BrightRed))))
}

fn code(style: Style) -> u8 {
    match style {
        Style::Divider => codes::DIVIDER,
        Style::Label => codes::LABEL,
        Style::Error => codes::ERROR,
    }
}

/// Report styler emitting ANSI escapes when color is enabled.
#[derive(Debug, Clone, Copy)]
pub struct TerminalStyler {
    enabled: bool,
}

impl TerminalStyler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Styler following the `NO_COLOR` / `COLOR` / TTY decision.
    pub fn detect() -> Self {
        Self::new(should_colorize())
    }
}

impl Styler for TerminalStyler {
    fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}{}", code(style), text, RESET)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
