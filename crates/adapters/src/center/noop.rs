// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centre for hosts without local notifications.

use super::{AuthorizationError, CenterError, NotificationCenter};
use async_trait::async_trait;
use reengage_core::{
    AuthorizationOptions, AuthorizationState, DeliveredNotification, NotificationId,
    NotificationRequest, NotificationSettings, PendingNotification,
};

/// Centre that never grants permission and keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotificationCenter;

impl NoOpNotificationCenter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationCenter for NoOpNotificationCenter {
    async fn request_authorization(
        &self,
        _options: AuthorizationOptions,
    ) -> Result<bool, AuthorizationError> {
        Ok(false)
    }

    async fn notification_settings(&self) -> NotificationSettings {
        NotificationSettings::for_state(AuthorizationState::Denied, AuthorizationOptions::default())
    }

    async fn add(&self, _request: NotificationRequest) -> Result<(), CenterError> {
        Ok(())
    }

    async fn pending_notifications(&self) -> Vec<PendingNotification> {
        Vec::new()
    }

    async fn delivered_notifications(&self) -> Vec<DeliveredNotification> {
        Vec::new()
    }

    async fn remove_pending(&self, _ids: &[NotificationId]) {}

    async fn remove_all_pending(&self) {}

    async fn remove_delivered(&self, _ids: &[NotificationId]) {}

    async fn remove_all_delivered(&self) {}
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
