// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local notification requests and their triggers.
//!
//! A request is identified solely by its [`NotificationId`]. Adding a request
//! whose id is already pending replaces the pending one, which is what makes
//! repeated scheduling idempotent.

use crate::clock::add_duration;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Identifier of the single re-engagement notification.
pub const ENGAGEMENT_NOTIFICATION_ID: &str = "engagement-notification";

/// Shortest interval a repeating interval trigger may use.
pub const MIN_REPEAT_INTERVAL: Duration = Duration::from_secs(60);

/// Caller-supplied handle for a notification request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fixed id reused for every engagement notification.
    pub fn engagement() -> Self {
        Self::new(ENGAGEMENT_NOTIFICATION_ID)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NotificationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for NotificationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NotificationId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NotificationId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Trigger rejected by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("interval trigger must be greater than zero")]
    ZeroInterval,
    #[error("repeating interval must be at least 60s, got {interval_ms}ms")]
    RepeatIntervalTooShort { interval_ms: u64 },
}

/// The instant a date trigger for `at` actually fires.
pub fn truncate_to_minute(at: DateTime<Utc>) -> DateTime<Utc> {
    at.duration_trunc(TimeDelta::minutes(1)).unwrap_or(at)
}

/// When a notification fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// Calendar match on year, month, day, hour and minute.
    Date { at: DateTime<Utc> },
    /// Relative to the moment the request was enqueued.
    Interval { interval_ms: u64 },
}

impl Trigger {
    /// Date trigger. Seconds are dropped: calendar matching has minute granularity.
    pub fn date(at: DateTime<Utc>) -> Self {
        Trigger::Date {
            at: truncate_to_minute(at),
        }
    }

    pub fn interval(interval: Duration) -> Self {
        Trigger::Interval {
            interval_ms: u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn validate(&self, repeats: bool) -> Result<(), TriggerError> {
        match *self {
            Trigger::Date { .. } => Ok(()),
            Trigger::Interval { interval_ms: 0 } => Err(TriggerError::ZeroInterval),
            Trigger::Interval { interval_ms } => {
                if repeats && Duration::from_millis(interval_ms) < MIN_REPEAT_INTERVAL {
                    return Err(TriggerError::RepeatIntervalTooShort { interval_ms });
                }
                Ok(())
            }
        }
    }

    /// First fire time for a request enqueued at `enqueued_at`.
    pub fn first_fire(&self, enqueued_at: DateTime<Utc>) -> DateTime<Utc> {
        match *self {
            Trigger::Date { at } => at,
            Trigger::Interval { interval_ms } => {
                add_duration(enqueued_at, Duration::from_millis(interval_ms))
            }
        }
    }

    /// Next fire time after firing at `fired_at`, if the trigger recurs.
    ///
    /// Date triggers match on the year too, so they never recur.
    pub fn next_fire(&self, fired_at: DateTime<Utc>, repeats: bool) -> Option<DateTime<Utc>> {
        match *self {
            Trigger::Date { .. } => None,
            Trigger::Interval { interval_ms } if repeats => Some(add_duration(
                fired_at,
                Duration::from_millis(interval_ms),
            )),
            Trigger::Interval { .. } => None,
        }
    }
}

/// A local notification to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub trigger: Trigger,
    pub repeats: bool,
    /// Play the default notification sound.
    #[serde(default = "default_sound")]
    pub sound: bool,
}

fn default_sound() -> bool {
    true
}

impl NotificationRequest {
    /// One-shot request with the default sound.
    pub fn new(
        id: impl Into<NotificationId>,
        title: impl Into<String>,
        body: impl Into<String>,
        trigger: Trigger,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            trigger,
            repeats: false,
            sound: true,
        }
    }

    pub fn repeating(mut self, repeats: bool) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn silent(mut self) -> Self {
        self.sound = false;
        self
    }

    pub fn validate(&self) -> Result<(), TriggerError> {
        self.trigger.validate(self.repeats)
    }
}

/// A request waiting in the platform queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNotification {
    pub request: NotificationRequest,
    pub fire_at: DateTime<Utc>,
}

impl PendingNotification {
    pub fn enqueue(request: NotificationRequest, enqueued_at: DateTime<Utc>) -> Self {
        let fire_at = request.trigger.first_fire(enqueued_at);
        Self { request, fire_at }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.fire_at <= now
    }
}

/// A notification shown to the user and still present in the notification centre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveredNotification {
    pub request: NotificationRequest,
    pub delivered_at: DateTime<Utc>,
}

impl DeliveredNotification {
    pub fn id(&self) -> &NotificationId {
        &self.request.id
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
