// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeDelta;
use reengage_core::{Clock, FakeClock};

#[test]
fn timestamp_uses_zulu_seconds() {
    let now = FakeClock::new().now();
    assert_eq!(timestamp(now), "2026-01-01T00:00:00Z");
}

#[yare::parameterized(
    past   = { -12 * 3600, "2026-01-01T00:00:00Z (12h ago)" },
    future = { 36 * 3600,  "2026-01-01T00:00:00Z (in 1d12h)" },
    same   = { 0,          "2026-01-01T00:00:00Z (now)" },
)]
fn relative_timestamps(now_offset_secs: i64, expected: &str) {
    let at = FakeClock::new().now();
    let now = at - TimeDelta::seconds(now_offset_secs);
    assert_eq!(timestamp_with_relative(at, now), expected);
}

#[test]
fn yes_no_words() {
    assert_eq!(yes_no(true), "yes");
    assert_eq!(yes_no(false), "no");
}
