// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! reengage-core: value types shared by the re-engagement notification engine

pub mod authorization;
pub mod clock;
pub mod notification;
pub mod prefs;
pub mod time_fmt;

pub use authorization::{AuthorizationOptions, AuthorizationState, NotificationSettings};
pub use clock::{Clock, FakeClock, SystemClock};
pub use notification::{
    DeliveredNotification, NotificationId, NotificationRequest, PendingNotification, Trigger,
    TriggerError, ENGAGEMENT_NOTIFICATION_ID,
};
pub use prefs::{record_first_use, MemoryPrefs, PrefValue, PreferenceStore, PrefsError};
pub use time_fmt::{format_elapsed, format_elapsed_ms, format_relative};
