// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop presenter using notify-rust.
//!
//! On macOS, `notify-rust` uses `mac-notification-sys`, whose first
//! notification runs an AppleScript lookup for a bundle identifier. That
//! lookup blocks forever without Automation permissions, so the identifier
//! is set up front.

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use reengage_core::NotificationRequest;

const APP_NAME: &str = "reengage";

#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopNotifyAdapter;

impl DesktopNotifyAdapter {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self
    }
}

#[async_trait]
impl NotifyAdapter for DesktopNotifyAdapter {
    async fn notify(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let id = request.id.to_string();
        let title = request.title.clone();
        let body = request.body.clone();
        // show() is synchronous on macOS; keep it off the async workers.
        let shown = tokio::task::spawn_blocking(move || {
            tracing::info!(%id, %title, "sending desktop notification");
            notify_rust::Notification::new()
                .appname(APP_NAME)
                .summary(&title)
                .body(&body)
                .show()
                .map(|_| ())
                .map_err(|e| NotifyError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotifyError::SendFailed(e.to_string()))?;

        if let Err(ref e) = shown {
            tracing::warn!(id = %request.id, error = %e, "desktop notification failed");
        }
        shown
    }
}
