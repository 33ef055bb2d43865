// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification centres: the platform's local-notification subsystem
//!
//! A centre owns authorization, the pending queue and the delivered list.
//! Scheduling and removal are best-effort; only authorization requests and
//! enqueue validation report errors.

mod noop;
mod spool;

pub use noop::NoOpNotificationCenter;
pub use spool::SpoolNotificationCenter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CenterCall, FakeNotificationCenter};

use async_trait::async_trait;
use reengage_core::{
    AuthorizationOptions, DeliveredNotification, NotificationId, NotificationRequest,
    NotificationSettings, PendingNotification, TriggerError,
};
use thiserror::Error;

/// Errors from an authorization request
#[derive(Debug, Error)]
pub enum AuthorizationError {
    #[error("authorization request failed: {0}")]
    RequestFailed(String),
}

/// Errors from enqueueing a notification
#[derive(Debug, Error)]
pub enum CenterError {
    #[error("invalid trigger: {0}")]
    InvalidTrigger(#[from] TriggerError),
    #[error("notification queue unavailable: {0}")]
    Unavailable(String),
}

/// Host notification subsystem
#[async_trait]
pub trait NotificationCenter: Clone + Send + Sync + 'static {
    /// Prompt for permission if undecided; otherwise return the existing decision.
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, AuthorizationError>;

    /// Current settings, without prompting.
    async fn notification_settings(&self) -> NotificationSettings;

    /// Enqueue a request, replacing any pending request with the same id.
    async fn add(&self, request: NotificationRequest) -> Result<(), CenterError>;

    async fn pending_notifications(&self) -> Vec<PendingNotification>;

    /// Notifications shown and not yet dismissed.
    async fn delivered_notifications(&self) -> Vec<DeliveredNotification>;

    /// Cancel pending requests; unknown ids are ignored.
    async fn remove_pending(&self, ids: &[NotificationId]);

    async fn remove_all_pending(&self);

    /// Dismiss delivered notifications; unknown ids are ignored.
    async fn remove_delivered(&self, ids: &[NotificationId]);

    async fn remove_all_delivered(&self);
}
