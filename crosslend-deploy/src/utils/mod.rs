// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use anstyle::{AnsiColor, Effects, Style};

const BOLD: Style = Style::new().effects(Effects::BOLD);
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);

/// Writes a failure to stderr, in full.
pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}
