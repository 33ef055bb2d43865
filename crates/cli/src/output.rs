// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print `text` or `value` depending on the format.
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    text: impl FnOnce() -> String,
    value: &T,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let text = text();
            if !text.is_empty() {
                println!("{}", text.trim_end_matches('\n'));
            }
            Ok(())
        }
        OutputFormat::Json => print_json(value),
    }
}

/// RFC 3339 to the second, always `Z`.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `"<timestamp> (<relative>)"`, e.g. `2026-01-03T00:00:00Z (in 1d12h)`.
pub fn timestamp_with_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!(
        "{} ({})",
        timestamp(at),
        reengage_core::format_relative(at, now)
    )
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
