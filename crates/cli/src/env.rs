// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use std::time::Duration;

fn parse_u64(var: &str) -> Option<u64> {
    std::env::var(var).ok().and_then(|s| s.trim().parse::<u64>().ok())
}

// --- State directory ---

/// Resolve state directory: REENGAGE_STATE_DIR > XDG_STATE_HOME/reengage > ~/.local/state/reengage
pub fn state_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("REENGAGE_STATE_DIR") {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("reengage"));
        }
    }
    dirs::home_dir().map(|home| home.join(".local/state/reengage"))
}

// --- Clock ---

/// Fixed wall clock in epoch milliseconds, when set.
pub fn now_ms() -> Option<u64> {
    parse_u64("REENGAGE_NOW_MS")
}

// --- Delivery ---

pub fn deliver_poll_ms() -> Option<Duration> {
    parse_u64("REENGAGE_DELIVER_POLL_MS")
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
