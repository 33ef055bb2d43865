// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notification centre for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AuthorizationError, CenterError, NotificationCenter};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use reengage_core::{
    AuthorizationOptions, AuthorizationState, DeliveredNotification, NotificationId,
    NotificationRequest, NotificationSettings, PendingNotification,
};
use std::sync::Arc;

/// Recorded centre call
#[derive(Debug, Clone, PartialEq)]
pub enum CenterCall {
    RequestAuthorization,
    Add(NotificationRequest),
    RemovePending(Vec<NotificationId>),
    RemoveAllPending,
    RemoveDelivered(Vec<NotificationId>),
    RemoveAllDelivered,
}

struct FakeCenterState {
    authorization: AuthorizationState,
    prompt_answer: Result<bool, String>,
    reject_adds: bool,
    now: DateTime<Utc>,
    pending: Vec<PendingNotification>,
    delivered: Vec<DeliveredNotification>,
    calls: Vec<CenterCall>,
}

/// In-memory centre recording every mutating call
#[derive(Clone)]
pub struct FakeNotificationCenter {
    inner: Arc<Mutex<FakeCenterState>>,
}

impl Default for FakeNotificationCenter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeCenterState {
                authorization: AuthorizationState::NotDetermined,
                prompt_answer: Ok(true),
                reject_adds: false,
                now: DateTime::<Utc>::UNIX_EPOCH,
                pending: Vec::new(),
                delivered: Vec::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeNotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authorization(state: AuthorizationState) -> Self {
        let center = Self::new();
        center.set_authorization(state);
        center
    }

    pub fn set_authorization(&self, state: AuthorizationState) {
        self.inner.lock().authorization = state;
    }

    /// Outcome of the next prompt for an undecided state.
    pub fn set_prompt_answer(&self, answer: Result<bool, String>) {
        self.inner.lock().prompt_answer = answer;
    }

    /// Make `add` fail as an unavailable queue would.
    pub fn set_reject_adds(&self, reject: bool) {
        self.inner.lock().reject_adds = reject;
    }

    /// Instant stamped on enqueued and delivered notifications.
    pub fn set_now(&self, now: DateTime<Utc>) {
        self.inner.lock().now = now;
    }

    /// Move a pending notification to the delivered list.
    pub fn deliver(&self, id: &str) -> bool {
        let mut inner = self.inner.lock();
        let Some(pos) = inner.pending.iter().position(|p| p.request.id == id) else {
            return false;
        };
        let pending = inner.pending.remove(pos);
        let delivered_at = inner.now;
        inner.delivered.push(DeliveredNotification {
            request: pending.request,
            delivered_at,
        });
        true
    }

    pub fn calls(&self) -> Vec<CenterCall> {
        self.inner.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }
}

#[async_trait]
impl NotificationCenter for FakeNotificationCenter {
    async fn request_authorization(
        &self,
        _options: AuthorizationOptions,
    ) -> Result<bool, AuthorizationError> {
        let mut inner = self.inner.lock();
        inner.calls.push(CenterCall::RequestAuthorization);
        if !inner.authorization.is_determined() {
            let granted = inner
                .prompt_answer
                .clone()
                .map_err(AuthorizationError::RequestFailed)?;
            inner.authorization = if granted {
                AuthorizationState::Authorized
            } else {
                AuthorizationState::Denied
            };
        }
        Ok(inner.authorization.allows_delivery())
    }

    async fn notification_settings(&self) -> NotificationSettings {
        NotificationSettings::for_state(
            self.inner.lock().authorization,
            AuthorizationOptions::default(),
        )
    }

    async fn add(&self, request: NotificationRequest) -> Result<(), CenterError> {
        request.validate()?;
        let mut inner = self.inner.lock();
        inner.calls.push(CenterCall::Add(request.clone()));
        if inner.reject_adds {
            return Err(CenterError::Unavailable("rejected by fake".to_string()));
        }
        let now = inner.now;
        inner.pending.retain(|p| p.request.id != request.id);
        inner.pending.push(PendingNotification::enqueue(request, now));
        Ok(())
    }

    async fn pending_notifications(&self) -> Vec<PendingNotification> {
        self.inner.lock().pending.clone()
    }

    async fn delivered_notifications(&self) -> Vec<DeliveredNotification> {
        self.inner.lock().delivered.clone()
    }

    async fn remove_pending(&self, ids: &[NotificationId]) {
        let mut inner = self.inner.lock();
        inner.calls.push(CenterCall::RemovePending(ids.to_vec()));
        inner.pending.retain(|p| !ids.contains(&p.request.id));
    }

    async fn remove_all_pending(&self) {
        let mut inner = self.inner.lock();
        inner.calls.push(CenterCall::RemoveAllPending);
        inner.pending.clear();
    }

    async fn remove_delivered(&self, ids: &[NotificationId]) {
        let mut inner = self.inner.lock();
        inner.calls.push(CenterCall::RemoveDelivered(ids.to_vec()));
        inner.delivered.retain(|d| !ids.contains(d.id()));
    }

    async fn remove_all_delivered(&self) {
        let mut inner = self.inner.lock();
        inner.calls.push(CenterCall::RemoveAllDelivered);
        inner.delivered.clear();
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
