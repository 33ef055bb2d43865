// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reengage launch` and `reengage check` - foreground events

use crate::app::App;
use crate::output::{emit, timestamp, timestamp_with_relative, OutputFormat};
use anyhow::Result;
use chrono::{DateTime, Utc};
use reengage_engine::Decision;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EngageReport {
    /// First use recorded by this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_use_recorded: Option<DateTime<Utc>>,
    pub decision: Decision,
}

/// App came to the foreground: record first use if absent, then schedule.
pub async fn launch(app: &App, format: OutputFormat) -> Result<()> {
    let now = app.now();
    let recorded = reengage_core::record_first_use(app.prefs.as_ref(), now)?;
    if recorded {
        tracing::info!(first_use = %now, "first use recorded");
    }
    let report = EngageReport {
        first_use_recorded: recorded.then_some(now),
        decision: app.scheduler().schedule().await,
    };
    emit(format, || render(&report, now), &report)
}

/// Run the scheduler once without touching first use.
pub async fn check(app: &App, format: OutputFormat) -> Result<()> {
    let report = EngageReport {
        first_use_recorded: None,
        decision: app.scheduler().schedule().await,
    };
    emit(format, || render(&report, app.now()), &report)
}

pub fn render(report: &EngageReport, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    if let Some(at) = report.first_use_recorded {
        out.push_str(&format!("First use recorded at {}\n", timestamp(at)));
    }
    out.push_str(&render_decision(&report.decision, now));
    out
}

pub fn render_decision(decision: &Decision, now: DateTime<Utc>) -> String {
    match decision {
        Decision::Schedule { fire_at } => format!(
            "Engagement notification scheduled for {}",
            timestamp_with_relative(*fire_at, now)
        ),
        Decision::Cancel => "Engagement notification cancelled".to_string(),
        Decision::Skip { reason } => format!("No action: {}", reason.as_str()),
    }
}

#[cfg(test)]
#[path = "engage_tests.rs"]
mod tests;
