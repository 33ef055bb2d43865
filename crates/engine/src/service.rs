// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification service: the app-facing surface over a notification centre.
//!
//! Scheduling and removal are fire-and-forget. The platform reports no
//! per-request outcome, so enqueue failures are logged and dropped here
//! rather than surfaced to callers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reengage_adapters::{AuthorizationError, NotificationCenter};
use reengage_core::{
    AuthorizationOptions, DeliveredNotification, NotificationId, NotificationRequest,
    NotificationSettings, Trigger,
};
use std::time::Duration;

#[async_trait]
pub trait NotificationService: Send + Sync + 'static {
    /// Ask for alert, badge and sound permission. Already-decided states
    /// return the existing decision without prompting.
    async fn request_authorization(&self) -> Result<bool, AuthorizationError>;

    async fn get_notification_settings(&self, send_telemetry: bool) -> NotificationSettings;

    async fn has_permission(&self) -> bool {
        self.get_notification_settings(false)
            .await
            .authorization
            .allows_delivery()
    }

    /// Enqueue a notification, replacing any pending one with the same id.
    async fn schedule(
        &self,
        title: &str,
        body: &str,
        id: &NotificationId,
        trigger: Trigger,
        repeats: bool,
    );

    /// Schedule for a calendar date (minute granularity).
    async fn schedule_at(
        &self,
        title: &str,
        body: &str,
        id: &NotificationId,
        date: DateTime<Utc>,
        repeats: bool,
    ) {
        self.schedule(title, body, id, Trigger::date(date), repeats)
            .await
    }

    /// Schedule relative to now.
    async fn schedule_after(
        &self,
        title: &str,
        body: &str,
        id: &NotificationId,
        interval: Duration,
        repeats: bool,
    ) {
        self.schedule(title, body, id, Trigger::interval(interval), repeats)
            .await
    }

    async fn find_delivered_notifications(&self) -> Vec<DeliveredNotification>;

    async fn find_delivered_notification(
        &self,
        id: &NotificationId,
    ) -> Option<DeliveredNotification> {
        self.find_delivered_notifications()
            .await
            .into_iter()
            .find(|n| n.id() == id)
    }

    async fn remove_all_pending_notifications(&self);

    async fn remove_pending_notifications(&self, ids: &[NotificationId]);
}

/// [`NotificationService`] backed by a [`NotificationCenter`].
#[derive(Clone)]
pub struct NotificationManager<C> {
    center: C,
    options: AuthorizationOptions,
}

impl<C: NotificationCenter> NotificationManager<C> {
    pub fn new(center: C) -> Self {
        Self {
            center,
            options: AuthorizationOptions::default(),
        }
    }

    pub fn center(&self) -> &C {
        &self.center
    }
}

#[async_trait]
impl<C: NotificationCenter> NotificationService for NotificationManager<C> {
    async fn request_authorization(&self) -> Result<bool, AuthorizationError> {
        self.center.request_authorization(self.options).await
    }

    async fn get_notification_settings(&self, send_telemetry: bool) -> NotificationSettings {
        let settings = self.center.notification_settings().await;
        if send_telemetry {
            tracing::debug!(authorization = %settings.authorization, "notification settings reported");
        }
        settings
    }

    async fn schedule(
        &self,
        title: &str,
        body: &str,
        id: &NotificationId,
        trigger: Trigger,
        repeats: bool,
    ) {
        let request =
            NotificationRequest::new(id.clone(), title, body, trigger).repeating(repeats);
        if let Err(e) = self.center.add(request).await {
            tracing::warn!(%id, error = %e, "notification not scheduled");
        }
    }

    async fn find_delivered_notifications(&self) -> Vec<DeliveredNotification> {
        self.center.delivered_notifications().await
    }

    async fn remove_all_pending_notifications(&self) {
        self.center.remove_all_pending().await;
    }

    async fn remove_pending_notifications(&self, ids: &[NotificationId]) {
        self.center.remove_pending(ids).await;
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
