// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Colored rendering of values for the odometer CLI.
//!
//! Letters, numerals and separators get their own colors so long values are
//! easy to scan. `ODOMETER_THEME` ("dark" or "light") picks the palette,
//! falling back to the `COLORFGBG` background hint and then to dark. Colors
//! are dropped for pipes and when `NO_COLOR` is set; the `wrap:` and `error:`
//! labels on stderr are only ever bold.

use std::sync::OnceLock;

use odometer::{Number, SEPARATOR};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

type Rgb = (u8, u8, u8);

/// Letter, numeral and separator colors.
struct Palette {
    letter: Rgb,
    numeral: Rgb,
    separator: Rgb,
}

// OneDark
const DARK: Palette = Palette {
    letter: (86, 182, 194),
    numeral: (229, 192, 123),
    separator: (92, 99, 112),
};

// One Light
const LIGHT: Palette = Palette {
    letter: (1, 132, 188),
    numeral: (193, 132, 1),
    separator: (160, 161, 167),
};

static PALETTE: OnceLock<&'static Palette> = OnceLock::new();

/// `COLORFGBG` is "fg;bg"; a background of 7 and up (except 8) is light.
fn is_light(theme: Option<&str>, colorfgbg: Option<&str>) -> bool {
    match theme.map(str::to_lowercase).as_deref() {
        Some("light" | "l") => return true,
        Some("dark" | "d") => return false,
        _ => {}
    }
    colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

fn palette() -> &'static Palette {
    PALETTE.get_or_init(|| {
        let theme = std::env::var("ODOMETER_THEME").ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        if is_light(theme.as_deref(), colorfgbg.as_deref()) {
            &LIGHT
        } else {
            &DARK
        }
    })
}

fn use_colors(stream: atty::Stream) -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(stream)
}

fn paint((r, g, b): Rgb, text: impl std::fmt::Display) -> String {
    format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET)
}

fn bold(enabled: bool, label: &str) -> String {
    if enabled {
        format!("{}{}{}", BOLD, label, RESET)
    } else {
        label.to_string()
    }
}

/// Render a number for stdout.
pub fn number(value: &Number) -> String {
    if !use_colors(atty::Stream::Stdout) {
        return value.to_string();
    }

    let palette = palette();
    let separator = paint(palette.separator, SEPARATOR);
    value
        .digits()
        .map(|digit| {
            format!(
                "{}{}",
                paint(palette.letter, digit.letter()),
                paint(palette.numeral, digit.numeral())
            )
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Stderr note printed when a step wrapped the counter.
pub fn wrapped(after: &Number) -> String {
    let label = bold(use_colors(atty::Stream::Stderr), "wrap:");
    format!("{} counter wrapped to {}", label, after)
}

/// Stderr line for a failure.
pub fn error(message: &str) -> String {
    let label = bold(use_colors(atty::Stream::Stderr), "error:");
    format!("{} {}", label, message)
}
