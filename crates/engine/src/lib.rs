// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Re-engagement notification engine

pub mod config;
mod engagement;
mod service;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake_service;

pub use config::{ConfigError, EngagementConfig, TARGET_OFFSET, WINDOW_UNIT};
pub use engagement::{
    decide, Decision, EngagementInputs, EngagementPhase, EngagementScheduler, SkipReason,
};
pub use service::{NotificationManager, NotificationService};

#[cfg(any(test, feature = "test-support"))]
pub use fake_service::{FakeNotificationService, ServiceCall};
