// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-spooled notification centre.
//!
//! The queue is a [`QueueFile`] shared by every process of the app: a
//! foreground invocation schedules or cancels, and a separate delivery pass
//! ([`SpoolNotificationCenter::deliver_due`]) presents whatever has come due.
//! The desktop has no permission prompt, so an undecided authorization
//! resolves to the configured answer (granted by default).

use super::{AuthorizationError, CenterError, NotificationCenter};
use crate::notify::NotifyAdapter;
use async_trait::async_trait;
use reengage_core::{
    AuthorizationOptions, AuthorizationState, Clock, DeliveredNotification, NotificationId,
    NotificationRequest, NotificationSettings, PendingNotification,
};
use reengage_storage::{QueueFile, QueueState, StoreError};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct SpoolNotificationCenter<C: Clock> {
    queue: Arc<QueueFile>,
    clock: C,
    grant_on_prompt: bool,
}

impl<C: Clock> SpoolNotificationCenter<C> {
    pub fn new(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            queue: Arc::new(QueueFile::new(path)),
            clock,
            grant_on_prompt: true,
        }
    }

    /// Answer given when an authorization request finds the state undecided.
    pub fn with_prompt_answer(mut self, grant: bool) -> Self {
        self.grant_on_prompt = grant;
        self
    }

    /// Overwrite the authorization state, as the system settings app would.
    pub fn set_authorization(&self, state: AuthorizationState) -> Result<(), StoreError> {
        self.queue.update(|queue| queue.authorization = state)?;
        tracing::info!(%state, "authorization changed");
        Ok(())
    }

    /// Present every pending notification whose fire time has passed.
    ///
    /// Due notifications leave the pending queue whether or not they are
    /// shown; repeating interval notifications are re-armed. A one-shot
    /// notification whose presentation fails is dropped after a warning and
    /// never retried, the same as a notification the platform discards.
    /// Without permission nothing is presented. Returns the notifications
    /// shown.
    pub async fn deliver_due<N: NotifyAdapter>(
        &self,
        presenter: &N,
    ) -> Result<Vec<DeliveredNotification>, StoreError> {
        let now = self.clock.now();
        let (due, allowed) = self.queue.update(|queue| {
            let (due, waiting): (Vec<_>, Vec<_>) =
                queue.pending.drain(..).partition(|p| p.is_due(now));
            queue.pending = waiting;
            for fired in &due {
                if let Some(next) = fired.request.trigger.next_fire(now, fired.request.repeats) {
                    queue.pending.push(PendingNotification {
                        request: fired.request.clone(),
                        fire_at: next,
                    });
                }
            }
            (due, queue.authorization.allows_delivery())
        })?;

        if due.is_empty() {
            return Ok(Vec::new());
        }
        if !allowed {
            tracing::info!(count = due.len(), "notifications due without permission, discarded");
            return Ok(Vec::new());
        }

        let mut shown = Vec::new();
        for pending in due {
            match presenter.notify(&pending.request).await {
                Ok(()) => shown.push(DeliveredNotification {
                    request: pending.request,
                    delivered_at: now,
                }),
                Err(e) => {
                    tracing::warn!(
                        id = %pending.request.id,
                        error = %e,
                        "presentation failed, dropping notification"
                    );
                }
            }
        }

        let delivered = shown.clone();
        self.queue.update(move |queue| {
            for notification in delivered {
                queue.delivered.retain(|d| d.id() != notification.id());
                queue.delivered.push(notification);
            }
        })?;
        Ok(shown)
    }

    fn load(&self) -> QueueState {
        match self.queue.load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(path = %self.queue.path().display(), error = %e, "queue unreadable");
                QueueState::default()
            }
        }
    }

    fn update_quietly(&self, action: &str, change: impl FnOnce(&mut QueueState)) {
        if let Err(e) = self.queue.update(change) {
            tracing::warn!(action, error = %e, "queue update failed");
        }
    }
}

#[async_trait]
impl<C: Clock> NotificationCenter for SpoolNotificationCenter<C> {
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, AuthorizationError> {
        let grant = self.grant_on_prompt;
        self.queue
            .update(|queue| {
                if !queue.authorization.is_determined() {
                    queue.authorization = if grant {
                        AuthorizationState::Authorized
                    } else {
                        AuthorizationState::Denied
                    };
                    queue.options = options;
                }
                queue.authorization.allows_delivery()
            })
            .map_err(|e| AuthorizationError::RequestFailed(e.to_string()))
    }

    async fn notification_settings(&self) -> NotificationSettings {
        let queue = self.load();
        NotificationSettings::for_state(queue.authorization, queue.options)
    }

    async fn add(&self, request: NotificationRequest) -> Result<(), CenterError> {
        request.validate()?;
        let pending = PendingNotification::enqueue(request, self.clock.now());
        self.queue
            .update(move |queue| {
                queue.pending.retain(|p| p.request.id != pending.request.id);
                queue.pending.push(pending);
            })
            .map_err(|e| CenterError::Unavailable(e.to_string()))
    }

    async fn pending_notifications(&self) -> Vec<PendingNotification> {
        self.load().pending
    }

    async fn delivered_notifications(&self) -> Vec<DeliveredNotification> {
        self.load().delivered
    }

    async fn remove_pending(&self, ids: &[NotificationId]) {
        self.update_quietly("remove_pending", |queue| {
            queue.pending.retain(|p| !ids.contains(&p.request.id));
        });
    }

    async fn remove_all_pending(&self) {
        self.update_quietly("remove_all_pending", |queue| queue.pending.clear());
    }

    async fn remove_delivered(&self, ids: &[NotificationId]) {
        self.update_quietly("remove_delivered", |queue| {
            queue.delivered.retain(|d| !ids.contains(d.id()));
        });
    }

    async fn remove_all_delivered(&self) {
        self.update_quietly("remove_all_delivered", |queue| queue.delivered.clear());
    }
}

#[cfg(test)]
#[path = "spool_tests.rs"]
mod tests;
