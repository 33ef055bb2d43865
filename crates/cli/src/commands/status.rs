// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reengage status` - engagement state at a glance

use crate::app::App;
use crate::output::{emit, timestamp_with_relative, yes_no, OutputFormat};
use anyhow::Result;
use chrono::{DateTime, Utc};
use reengage_adapters::NotificationCenter;
use reengage_core::{AuthorizationState, DeliveredNotification, PendingNotification};
use reengage_engine::{decide, Decision, EngagementPhase};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct StatusView {
    pub state_dir: PathBuf,
    pub now: DateTime<Utc>,
    pub first_use: Option<DateTime<Utc>>,
    pub phase: EngagementPhase,
    pub opted_in: bool,
    pub authorization: AuthorizationState,
    /// What the next foreground event would do.
    pub next: Decision,
    pub pending: Vec<PendingNotification>,
    pub delivered: Vec<DeliveredNotification>,
}

pub async fn handle(app: &App, format: OutputFormat) -> Result<()> {
    let view = gather(app).await;
    emit(format, || render(&view), &view)
}

pub async fn gather(app: &App) -> StatusView {
    let scheduler = app.scheduler();
    let inputs = scheduler.inputs().await;
    let center = app.service().center();
    let settings = center.notification_settings().await;

    StatusView {
        state_dir: app.state_dir().to_path_buf(),
        now: inputs.now,
        first_use: inputs.first_use,
        phase: EngagementPhase::classify(inputs.first_use, inputs.now, app.config.window_unit()),
        opted_in: inputs.opted_in,
        authorization: settings.authorization,
        next: decide(&inputs, &app.config),
        pending: center.pending_notifications().await,
        delivered: center.delivered_notifications().await,
    }
}

pub fn render(view: &StatusView) -> String {
    let now = view.now;
    let first_use = match view.first_use {
        Some(at) => timestamp_with_relative(at, now),
        None => "not recorded".to_string(),
    };
    let next = match view.next {
        Decision::Schedule { fire_at } => {
            format!("schedule for {}", timestamp_with_relative(fire_at, now))
        }
        Decision::Cancel => "cancel pending notification".to_string(),
        Decision::Skip { reason } => format!("no action ({})", reason.as_str()),
    };

    let mut out = String::new();
    let mut line = |label: &str, value: &str| out.push_str(&format!("{label:<13}{value}\n"));
    line("State:", &view.state_dir.display().to_string());
    line("First use:", &first_use);
    line("Phase:", view.phase.as_str());
    line("Opted in:", yes_no(view.opted_in));
    line("Permission:", view.authorization.as_str());
    line("Next launch:", &next);

    out.push_str(&format!("\nPending ({}):\n", view.pending.len()));
    for pending in &view.pending {
        let repeats = if pending.request.repeats {
            ", repeats"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {}  fires {}{repeats}\n",
            pending.request.id,
            timestamp_with_relative(pending.fire_at, now)
        ));
    }

    out.push_str(&format!("\nDelivered ({}):\n", view.delivered.len()));
    for delivered in &view.delivered {
        out.push_str(&format!(
            "  {}  {}  \"{}\"\n",
            delivered.request.id,
            timestamp_with_relative(delivered.delivered_at, now),
            delivered.request.title
        ));
    }
    out
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
