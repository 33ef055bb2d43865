// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake presenter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use parking_lot::Mutex;
use reengage_core::{NotificationId, NotificationRequest};
use std::sync::Arc;

/// Recorded presentation
#[derive(Debug, Clone)]
pub struct NotifyCall {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
}

#[derive(Default)]
struct FakeNotifyState {
    calls: Vec<NotifyCall>,
    fail: bool,
}

/// Fake presenter for testing
#[derive(Clone, Default)]
pub struct FakeNotifyAdapter {
    inner: Arc<Mutex<FakeNotifyState>>,
}

impl FakeNotifyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded presentations
    pub fn calls(&self) -> Vec<NotifyCall> {
        self.inner.lock().calls.clone()
    }

    /// Make subsequent presentations fail
    pub fn set_failing(&self, fail: bool) {
        self.inner.lock().fail = fail;
    }
}

#[async_trait]
impl NotifyAdapter for FakeNotifyAdapter {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let mut inner = self.inner.lock();
        if inner.fail {
            return Err(NotifyError::SendFailed("presenter unavailable".to_string()));
        }
        inner.calls.push(NotifyCall {
            id: request.id.clone(),
            title: request.title.clone(),
            body: request.body.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
