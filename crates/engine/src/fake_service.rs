// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notification service for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::service::NotificationService;
use async_trait::async_trait;
use parking_lot::Mutex;
use reengage_adapters::AuthorizationError;
use reengage_core::{
    AuthorizationOptions, AuthorizationState, DeliveredNotification, NotificationId,
    NotificationSettings, Trigger,
};
use std::sync::Arc;
use std::time::Duration;

/// Recorded service call
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    RequestAuthorization,
    Schedule {
        title: String,
        body: String,
        id: NotificationId,
        trigger: Trigger,
        repeats: bool,
    },
    RemovePending(Vec<NotificationId>),
    RemoveAllPending,
}

struct FakeServiceState {
    authorization: AuthorizationState,
    permission_delay: Option<Duration>,
    delivered: Vec<DeliveredNotification>,
    calls: Vec<ServiceCall>,
}

/// Service that records calls instead of talking to a centre
#[derive(Clone)]
pub struct FakeNotificationService {
    inner: Arc<Mutex<FakeServiceState>>,
}

impl Default for FakeNotificationService {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeServiceState {
                authorization: AuthorizationState::Authorized,
                permission_delay: None,
                delivered: Vec::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeNotificationService {
    /// Authorized by default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_authorization(&self, state: AuthorizationState) {
        self.inner.lock().authorization = state;
    }

    /// Delay every settings query by `delay`.
    pub fn set_permission_delay(&self, delay: Duration) {
        self.inner.lock().permission_delay = Some(delay);
    }

    pub fn add_delivered(&self, notification: DeliveredNotification) {
        self.inner.lock().delivered.push(notification);
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.inner.lock().calls.clone()
    }

    pub fn schedule_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ServiceCall::Schedule { .. }))
            .count()
    }

    pub fn remove_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ServiceCall::RemovePending(_)))
            .count()
    }
}

#[async_trait]
impl NotificationService for FakeNotificationService {
    async fn request_authorization(&self) -> Result<bool, AuthorizationError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ServiceCall::RequestAuthorization);
        if !inner.authorization.is_determined() {
            inner.authorization = AuthorizationState::Authorized;
        }
        Ok(inner.authorization.allows_delivery())
    }

    async fn get_notification_settings(&self, _send_telemetry: bool) -> NotificationSettings {
        let delay = self.inner.lock().permission_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let authorization = self.inner.lock().authorization;
        NotificationSettings::for_state(authorization, AuthorizationOptions::default())
    }

    async fn schedule(
        &self,
        title: &str,
        body: &str,
        id: &NotificationId,
        trigger: Trigger,
        repeats: bool,
    ) {
        self.inner.lock().calls.push(ServiceCall::Schedule {
            title: title.to_string(),
            body: body.to_string(),
            id: id.clone(),
            trigger,
            repeats,
        });
    }

    async fn find_delivered_notifications(&self) -> Vec<DeliveredNotification> {
        self.inner.lock().delivered.clone()
    }

    async fn remove_all_pending_notifications(&self) {
        self.inner.lock().calls.push(ServiceCall::RemoveAllPending);
    }

    async fn remove_pending_notifications(&self, ids: &[NotificationId]) {
        self.inner
            .lock()
            .calls
            .push(ServiceCall::RemovePending(ids.to_vec()));
    }
}
