// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reengage prefs` - the settings screen

use crate::app::App;
use crate::output::{emit, timestamp_with_relative, OutputFormat};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use reengage_core::prefs::keys;
use reengage_core::PreferenceStore;
use serde::Serialize;

#[derive(Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommand,
}

#[derive(Subcommand)]
pub enum PrefsCommand {
    /// Show stored preferences
    Show,
    /// Allow engagement notifications
    OptIn,
    /// Stop engagement notifications
    OptOut,
    /// Forget the first-use timestamp
    ResetFirstUse,
}

#[derive(Debug, Serialize)]
pub struct PrefsView {
    pub first_use: Option<DateTime<Utc>>,
    pub engagement_notifications: bool,
}

impl PrefsView {
    pub fn read(prefs: &dyn PreferenceStore) -> Self {
        Self {
            first_use: prefs.get_timestamp(keys::FIRST_USE),
            engagement_notifications: prefs.get_bool(keys::ENGAGEMENT_NOTIFICATIONS, true),
        }
    }
}

pub fn handle(command: PrefsCommand, app: &App, format: OutputFormat) -> Result<()> {
    let prefs = app.prefs.as_ref();
    match command {
        PrefsCommand::Show => {}
        PrefsCommand::OptIn => {
            prefs.set_bool(keys::ENGAGEMENT_NOTIFICATIONS, true)?;
            tracing::info!("engagement notifications enabled");
        }
        PrefsCommand::OptOut => {
            prefs.set_bool(keys::ENGAGEMENT_NOTIFICATIONS, false)?;
            tracing::info!("engagement notifications disabled");
        }
        PrefsCommand::ResetFirstUse => {
            prefs.remove(keys::FIRST_USE)?;
            tracing::info!("first use cleared");
        }
    }
    let view = PrefsView::read(prefs);
    emit(format, || render(&view, app.now()), &view)
}

pub fn render(view: &PrefsView, now: DateTime<Utc>) -> String {
    let first_use = match view.first_use {
        Some(at) => timestamp_with_relative(at, now),
        None => "not recorded".to_string(),
    };
    let notifications = if view.engagement_notifications {
        "on"
    } else {
        "off"
    };
    format!(
        "{:<28}{first_use}\n{:<28}{notifications}",
        "First use:", "Engagement notifications:"
    )
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
