// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction.
//!
//! Every decision the engine makes is a function of "now", so the clock is
//! injected rather than read directly. [`FakeClock`] is shared by cloning and
//! advanced explicitly by tests.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Source of the current wall-clock time.
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch, saturating at zero for pre-epoch times.
    fn epoch_ms(&self) -> u64 {
        u64::try_from(self.now().timestamp_millis()).unwrap_or(0)
    }
}

/// Clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

/// 2026-01-01T00:00:00Z
const FAKE_CLOCK_START_MS: i64 = 1_767_225_600_000;

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(from_epoch_ms(FAKE_CLOCK_START_MS as u64))
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current = add_duration(*current, by);
    }

    /// Move the clock backwards (for clock-skew scenarios).
    pub fn rewind(&self, by: Duration) {
        let mut current = self.current.lock();
        *current = current
            .checked_sub_signed(to_delta(by))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.current.lock() = now;
    }

    pub fn set_epoch_ms(&self, ms: u64) {
        self.set(from_epoch_ms(ms));
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}

/// Convert a std duration to a chrono delta, saturating at the maximum.
pub fn to_delta(d: Duration) -> TimeDelta {
    TimeDelta::from_std(d).unwrap_or(TimeDelta::MAX)
}

/// `at + by`, saturating at the latest representable instant.
pub fn add_duration(at: DateTime<Utc>, by: Duration) -> DateTime<Utc> {
    at.checked_add_signed(to_delta(by))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Whole milliseconds in `d`, saturating at `u64::MAX`.
pub fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Build a UTC instant from epoch milliseconds, saturating out-of-range values.
pub fn from_epoch_ms(ms: u64) -> DateTime<Utc> {
    let ms = i64::try_from(ms).unwrap_or(i64::MAX);
    Utc.timestamp_millis_opt(ms)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
