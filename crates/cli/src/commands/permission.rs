// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reengage permission` - notification authorization

use crate::app::App;
use crate::output::{emit, yes_no, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use reengage_core::{AuthorizationState, NotificationSettings};
use reengage_engine::NotificationService;

#[derive(Args)]
pub struct PermissionArgs {
    #[command(subcommand)]
    pub command: PermissionCommand,
}

#[derive(Subcommand)]
pub enum PermissionCommand {
    /// Show the current authorization and enabled features
    Show,
    /// Ask for permission (answered immediately when undecided)
    Request,
    /// Change the authorization, as the system settings would
    Set {
        /// not-determined, denied, authorized, provisional or ephemeral
        state: AuthorizationState,
    },
}

pub async fn handle(command: PermissionCommand, app: &App, format: OutputFormat) -> Result<()> {
    match command {
        PermissionCommand::Show => {}
        PermissionCommand::Request => {
            let granted = app.service().request_authorization().await?;
            tracing::info!(granted, "authorization requested");
        }
        PermissionCommand::Set { state } => {
            app.spool().set_authorization(state)?;
        }
    }
    let settings = app.service().get_notification_settings(false).await;
    emit(format, || render(&settings), &settings)
}

pub fn render(settings: &NotificationSettings) -> String {
    let delivery = if settings.authorization.allows_delivery() {
        "allowed"
    } else {
        "blocked"
    };
    format!(
        "Permission: {} (delivery {delivery})\n  alert: {}  badge: {}  sound: {}",
        settings.authorization,
        yes_no(settings.alert_enabled),
        yes_no(settings.badge_enabled),
        yes_no(settings.sound_enabled),
    )
}

#[cfg(test)]
#[path = "permission_tests.rs"]
mod tests;
