// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the odometer command-line interface.
//!
//! With no subcommand the binary prints the (leniently parsed) value and its
//! successor. `next` advances any number of steps, `check` validates strictly,
//! and `seq` lists the values that follow. Every command can emit JSON.

pub mod display;
pub mod logging;

use clap::{Args, Parser, Subcommand};

use logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "odometer",
    about = "Increment letter/numeral counters like B3-K7-A1",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Value to print and advance once (malformed input becomes A1); not
    /// allowed together with a subcommand
    pub value: Option<String>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter, e.g. "debug" or "odometer=trace" (defaults to RUST_LOG, then warn)
    #[arg(long, global = true, env = "ODOMETER_LOG")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, env = "ODOMETER_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Advance a value and print the result
    Next {
        /// Starting value
        value: String,

        /// Number of increments to apply
        #[arg(short = 'n', long, default_value = "1")]
        steps: u64,

        /// Fail on malformed input instead of starting from A1
        #[arg(long)]
        strict: bool,
    },

    /// Validate a value and print its canonical form
    Check {
        /// Value to validate
        value: String,
    },

    /// Print the values that follow a starting value
    Seq {
        /// Starting value (not printed)
        value: String,

        /// How many values to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Fail on malformed input instead of starting from A1
        #[arg(long)]
        strict: bool,
    },
}
