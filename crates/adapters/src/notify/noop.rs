// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op presenter.

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use reengage_core::NotificationRequest;

/// Presenter that reports success without showing anything.
///
/// Used for headless delivery, where only the delivered list matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifyAdapter;

impl NoOpNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for NoOpNotifyAdapter {
    async fn notify(&self, _request: &NotificationRequest) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
