// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured logging for the binary.
//!
//! Logs go to stderr so stdout stays clean for values and JSON. The filter
//! comes from `--log-level` (or `ODOMETER_LOG`), then `RUST_LOG`, then `warn`.

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    Compact,
    /// One JSON object per event
    Json,
}

fn filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter {:?}", directives)),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Call once, before any other work.
pub fn init(level: Option<&str>, format: LogFormat) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(level)?)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
