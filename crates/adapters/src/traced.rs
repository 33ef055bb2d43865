// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced centre wrapper for consistent observability

use crate::center::{AuthorizationError, CenterError, NotificationCenter};
use async_trait::async_trait;
use reengage_core::{
    AuthorizationOptions, DeliveredNotification, NotificationId, NotificationRequest,
    NotificationSettings, PendingNotification,
};
use tracing::Instrument;

/// Wrapper that adds tracing to any NotificationCenter
#[derive(Clone)]
pub struct TracedCenter<C> {
    inner: C,
}

impl<C> TracedCenter<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

fn join_ids(ids: &[NotificationId]) -> String {
    ids.iter()
        .map(NotificationId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl<C: NotificationCenter> NotificationCenter for TracedCenter<C> {
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, AuthorizationError> {
        async {
            tracing::info!(
                alert = options.alert,
                badge = options.badge,
                sound = options.sound,
                "requesting"
            );
            let result = self.inner.request_authorization(options).await;
            match &result {
                Ok(granted) => tracing::info!(granted, "authorization resolved"),
                Err(e) => tracing::warn!(error = %e, "authorization failed"),
            }
            result
        }
        .instrument(tracing::info_span!("notify.authorize"))
        .await
    }

    async fn notification_settings(&self) -> NotificationSettings {
        let settings = self.inner.notification_settings().await;
        tracing::trace!(authorization = %settings.authorization, "settings read");
        settings
    }

    async fn add(&self, request: NotificationRequest) -> Result<(), CenterError> {
        let span = tracing::info_span!("notify.add", id = %request.id);
        async {
            tracing::info!(trigger = ?request.trigger, repeats = request.repeats, "enqueueing");
            let result = self.inner.add(request).await;
            match &result {
                Ok(()) => tracing::info!("enqueued"),
                Err(e) => tracing::warn!(error = %e, "enqueue failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn pending_notifications(&self) -> Vec<PendingNotification> {
        let pending = self.inner.pending_notifications().await;
        tracing::trace!(count = pending.len(), "pending listed");
        pending
    }

    async fn delivered_notifications(&self) -> Vec<DeliveredNotification> {
        let delivered = self.inner.delivered_notifications().await;
        tracing::trace!(count = delivered.len(), "delivered listed");
        delivered
    }

    async fn remove_pending(&self, ids: &[NotificationId]) {
        let ids_field = join_ids(ids);
        tracing::info_span!("notify.remove_pending", ids = %ids_field)
            .in_scope(|| tracing::info!("cancelling"));
        self.inner.remove_pending(ids).await;
    }

    async fn remove_all_pending(&self) {
        tracing::info_span!("notify.remove_all_pending").in_scope(|| tracing::info!("cancelling"));
        self.inner.remove_all_pending().await;
    }

    async fn remove_delivered(&self, ids: &[NotificationId]) {
        let ids_field = join_ids(ids);
        tracing::info_span!("notify.remove_delivered", ids = %ids_field)
            .in_scope(|| tracing::info!("dismissing"));
        self.inner.remove_delivered(ids).await;
    }

    async fn remove_all_delivered(&self) {
        tracing::info_span!("notify.remove_all_delivered")
            .in_scope(|| tracing::info!("dismissing"));
        self.inner.remove_all_delivered().await;
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
