// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engagement notification scheduling.
//!
//! On every foreground event the scheduler decides whether to schedule,
//! cancel or leave alone the single engagement notification:
//!
//! | Inputs                         | Action                              |
//! |--------------------------------|-------------------------------------|
//! | no first-use timestamp         | skip                                |
//! | no notification permission     | skip                                |
//! | user opted out                 | skip                                |
//! | `elapsed < W`                  | schedule at `first_use + offset`    |
//! | `W <= elapsed < 2W`            | cancel the pending notification     |
//! | `elapsed >= 2W`                | skip                                |
//!
//! The checks short-circuit in that order, so revoking permission or opting
//! out never issues a cancel. At most one service call is made per run, and
//! nothing is remembered between runs.
//!
//! The scheduled instant is truncated to the minute, matching the date
//! trigger that is actually enqueued.

use crate::config::EngagementConfig;
use crate::service::NotificationService;
use chrono::{DateTime, TimeDelta, Utc};
use reengage_core::clock::{add_duration, duration_ms, to_delta};
use reengage_core::notification::truncate_to_minute;
use reengage_core::prefs::keys;
use reengage_core::{Clock, NotificationId, PreferenceStore};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Where the user is relative to first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementPhase {
    /// First use not recorded.
    Unset,
    /// Within the first window (including a first use in the future).
    Window1,
    Window2,
    /// Past both windows.
    Expired,
}

impl EngagementPhase {
    pub fn classify(
        first_use: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        window_unit: Duration,
    ) -> Self {
        let Some(first_use) = first_use else {
            return EngagementPhase::Unset;
        };
        let elapsed = now - first_use;
        let window = to_delta(window_unit);
        if elapsed < window {
            EngagementPhase::Window1
        } else if elapsed < window.checked_mul(2).unwrap_or(TimeDelta::MAX) {
            EngagementPhase::Window2
        } else {
            EngagementPhase::Expired
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EngagementPhase::Unset => "unset",
            EngagementPhase::Window1 => "window1",
            EngagementPhase::Window2 => "window2",
            EngagementPhase::Expired => "expired",
        }
    }
}

impl fmt::Display for EngagementPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a run took no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoFirstUse,
    NoPermission,
    OptedOut,
    Expired,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoFirstUse => "first use not recorded",
            SkipReason::NoPermission => "no notification permission",
            SkipReason::OptedOut => "opted out",
            SkipReason::Expired => "past engagement windows",
        }
    }
}

/// Outcome of one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    Schedule { fire_at: DateTime<Utc> },
    Cancel,
    Skip { reason: SkipReason },
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Schedule { fire_at } => {
                write!(f, "scheduled for {}", fire_at.to_rfc3339())
            }
            Decision::Cancel => f.write_str("cancelled pending notification"),
            Decision::Skip { reason } => write!(f, "no action ({})", reason.as_str()),
        }
    }
}

/// Inputs read fresh on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementInputs {
    pub now: DateTime<Utc>,
    pub first_use: Option<DateTime<Utc>>,
    pub has_permission: bool,
    pub opted_in: bool,
}

/// Pure decision table.
pub fn decide(inputs: &EngagementInputs, config: &EngagementConfig) -> Decision {
    let Some(first_use) = inputs.first_use else {
        return Decision::Skip {
            reason: SkipReason::NoFirstUse,
        };
    };
    if !inputs.has_permission {
        return Decision::Skip {
            reason: SkipReason::NoPermission,
        };
    }
    if !inputs.opted_in {
        return Decision::Skip {
            reason: SkipReason::OptedOut,
        };
    }

    match EngagementPhase::classify(Some(first_use), inputs.now, config.window_unit()) {
        EngagementPhase::Window1 => Decision::Schedule {
            fire_at: truncate_to_minute(add_duration(first_use, config.target_offset())),
        },
        EngagementPhase::Window2 => Decision::Cancel,
        EngagementPhase::Expired | EngagementPhase::Unset => Decision::Skip {
            reason: SkipReason::Expired,
        },
    }
}

/// Runs the decision table against live inputs and applies the result.
pub struct EngagementScheduler<S, P, C> {
    service: S,
    prefs: P,
    clock: C,
    config: EngagementConfig,
    id: NotificationId,
}

impl<S, P, C> EngagementScheduler<S, P, C>
where
    S: NotificationService,
    P: PreferenceStore,
    C: Clock,
{
    pub fn new(service: S, prefs: P, clock: C, config: EngagementConfig) -> Self {
        Self {
            service,
            prefs,
            clock,
            config,
            id: NotificationId::engagement(),
        }
    }

    pub fn config(&self) -> &EngagementConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Current inputs. The permission query is the only await.
    pub async fn inputs(&self) -> EngagementInputs {
        let now = self.clock.now();
        let first_use = self.prefs.get_timestamp(keys::FIRST_USE);
        let opted_in = self.prefs.get_bool(keys::ENGAGEMENT_NOTIFICATIONS, true);
        let has_permission = self.permission().await;
        EngagementInputs {
            now,
            first_use,
            has_permission,
            opted_in,
        }
    }

    /// Decide and act once. Returns what was done.
    pub async fn schedule(&self) -> Decision {
        let inputs = self.inputs().await;
        let decision = decide(&inputs, &self.config);

        match decision {
            Decision::Schedule { fire_at } => {
                tracing::info!(id = %self.id, %fire_at, "scheduling engagement notification");
                let config = &self.config;
                self.service
                    .schedule_at(&config.title, &config.body, &self.id, fire_at, false)
                    .await;
            }
            Decision::Cancel => {
                tracing::info!(id = %self.id, "cancelling engagement notification");
                self.service
                    .remove_pending_notifications(std::slice::from_ref(&self.id))
                    .await;
            }
            Decision::Skip { reason } => {
                tracing::debug!(
                    id = %self.id,
                    reason = reason.as_str(),
                    "engagement notification untouched"
                );
            }
        }
        decision
    }

    async fn permission(&self) -> bool {
        let Some(limit) = self.config.permission_timeout() else {
            return self.service.has_permission().await;
        };
        match tokio::time::timeout(limit, self.service.has_permission()).await {
            Ok(granted) => granted,
            Err(_) => {
                let timeout_ms = duration_ms(limit);
                tracing::warn!(timeout_ms, "permission query timed out, treating as denied");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "engagement_tests.rs"]
mod tests;
