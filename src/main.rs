// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use odometer::{Digit, Number};

mod cli;
use cli::{display, Cli, Commands};

#[derive(Serialize)]
struct Step {
    value: Number,
    next: Number,
    wrapped: bool,
}

#[derive(Serialize)]
struct Advance {
    from: Number,
    to: Number,
    steps: u64,
    wraps: u64,
}

#[derive(Serialize)]
struct Check<'a> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = cli::logging::init(cli.global.log_level.as_deref(), cli.global.log_format) {
        eprintln!("{}", display::error(&format!("{:#}", e)));
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", display::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let json = cli.global.json;
    if let (Some(value), Some(_)) = (&cli.value, &cli.command) {
        bail!("unexpected value {:?} before the subcommand", value);
    }
    match cli.command {
        None => print_step(cli.value.as_deref().unwrap_or(""), json),
        Some(Commands::Next {
            value,
            steps,
            strict,
        }) => advance(&value, steps, strict, json),
        Some(Commands::Check { value }) => check(&value, json),
        Some(Commands::Seq {
            value,
            count,
            strict,
        }) => sequence(&value, count, strict, json),
    }
}

fn load(text: &str, strict: bool) -> Result<Number> {
    if strict {
        Number::parse(text).with_context(|| format!("invalid number {:?}", text))
    } else {
        Ok(Number::parse_or_minimum(text))
    }
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value).context("failed to encode JSON")?);
    Ok(())
}

/// Print the value and its successor, one per line.
fn print_step(text: &str, json: bool) -> Result<ExitCode> {
    let value = Number::parse_or_minimum(text);
    let mut next = value;
    let wrapped = next.increment().is_overflow();

    if json {
        emit(&Step {
            value,
            next,
            wrapped,
        })?;
    } else {
        println!("{}", display::number(&value));
        println!("{}", display::number(&next));
        if wrapped {
            eprintln!("{}", display::wrapped(&next));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn advance(text: &str, steps: u64, strict: bool, json: bool) -> Result<ExitCode> {
    let from = load(text, strict)?;
    let mut to = from;
    let mut wraps = 0;
    for _ in 0..steps {
        if to.increment().is_overflow() {
            wraps += 1;
        }
    }
    info!(%from, %to, steps, wraps, "advanced");

    if json {
        emit(&Advance {
            from,
            to,
            steps,
            wraps,
        })?;
    } else {
        println!("{}", display::number(&to));
        if wraps > 0 {
            eprintln!("{}", display::wrapped(&to));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn check(text: &str, json: bool) -> Result<ExitCode> {
    let parsed = Number::parse(text);
    debug!(input = text, ok = parsed.is_ok(), "checked");

    if json {
        let report = match &parsed {
            Ok(value) => Check {
                input: text,
                valid: value.is_valid(),
                value: Some(*value),
                error: None,
            },
            Err(e) => Check {
                input: text,
                valid: false,
                value: None,
                error: Some(e.to_string()),
            },
        };
        emit(&report)?;
    } else {
        match &parsed {
            Ok(value) => println!("{}", display::number(value)),
            Err(e) => eprintln!("{}", display::error(&format!("{:?}: {}", text, e))),
        }
    }

    Ok(if parsed.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn sequence(text: &str, count: usize, strict: bool, json: bool) -> Result<ExitCode> {
    let start = load(text, strict)?;
    let values: Vec<Number> = start.successors().take(count).collect();

    if json {
        emit(&values)?;
    } else {
        for value in &values {
            println!("{}", display::number(value));
        }
    }
    Ok(ExitCode::SUCCESS)
}
