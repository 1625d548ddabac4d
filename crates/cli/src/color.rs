// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tarmac Contributors

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

pub mod codes {
    /// Resource names and commit shas: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Job names and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Annotations (passed, also needs): medium grey
    pub const CONTEXT: u8 = 245;
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Build clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::HEADER)))))
        .literal(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::LITERAL)))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::CONTEXT)))))
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("{}{}{}", fg256(code), text, RESET)
    } else {
        text.to_string()
    }
}

/// Format text with the header color (steel blue).
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Format text with the literal color (light grey).
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Format text with the context color (medium grey).
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
