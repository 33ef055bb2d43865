// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable durations for status output.

use chrono::{DateTime, Utc};

/// Format seconds as a short duration: `"5s"`, `"2m"`, `"1h30m"`, `"1d12h"`.
///
/// Beyond a day, hours are kept when non-zero so window boundaries
/// (24h, 48h) stay legible.
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        if m > 0 {
            format!("{}h{}m", h, m)
        } else {
            format!("{}h", h)
        }
    } else {
        let d = secs / 86400;
        let h = (secs % 86400) / 3600;
        if h > 0 {
            format!("{}d{}h", d, h)
        } else {
            format!("{}d", d)
        }
    }
}

pub fn format_elapsed_ms(ms: u64) -> String {
    format_elapsed(ms / 1000)
}

/// Describe `at` relative to `now`: `"12h ago"`, `"in 1d12h"`, `"now"`.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds();
    if secs == 0 {
        "now".to_string()
    } else if secs > 0 {
        format!("{} ago", format_elapsed(secs.unsigned_abs()))
    } else {
        format!("in {}", format_elapsed(secs.unsigned_abs()))
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
