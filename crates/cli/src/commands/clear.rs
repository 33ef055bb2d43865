// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reengage clear` - dismiss delivered notifications

use crate::app::App;
use crate::output::{emit, OutputFormat};
use anyhow::Result;
use reengage_adapters::NotificationCenter;
use reengage_core::NotificationId;
use reengage_engine::NotificationService;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClearReport {
    pub cleared: Vec<NotificationId>,
}

pub async fn handle(app: &App, format: OutputFormat) -> Result<()> {
    let cleared: Vec<NotificationId> = app
        .service()
        .find_delivered_notifications()
        .await
        .into_iter()
        .map(|d| d.request.id)
        .collect();
    app.service().center().remove_all_delivered().await;

    let report = ClearReport { cleared };
    emit(format, || render(&report), &report)
}

pub fn render(report: &ClearReport) -> String {
    match report.cleared.len() {
        0 => "No delivered notifications".to_string(),
        1 => "Cleared 1 delivered notification".to_string(),
        n => format!("Cleared {n} delivered notifications"),
    }
}

#[cfg(test)]
#[path = "clear_tests.rs"]
mod tests;
