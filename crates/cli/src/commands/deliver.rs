// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reengage deliver` - present notifications whose time has come

use crate::app::App;
use crate::output::{emit, timestamp, OutputFormat};
use anyhow::Result;
use clap::Args;
use reengage_adapters::{DesktopNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter};
use reengage_core::clock::duration_ms;
use reengage_core::DeliveredNotification;
use std::time::Duration;

/// Poll interval for `--watch` when `REENGAGE_DELIVER_POLL_MS` is unset.
const DEFAULT_POLL: Duration = Duration::from_secs(30);

#[derive(Args)]
pub struct DeliverArgs {
    /// Keep running and deliver as notifications come due
    #[arg(long)]
    pub watch: bool,

    /// Move due notifications to delivered without showing them
    #[arg(long)]
    pub quiet: bool,
}

pub async fn handle(args: DeliverArgs, app: &App, format: OutputFormat) -> Result<()> {
    if args.quiet {
        run(&NoOpNotifyAdapter::new(), args.watch, app, format).await
    } else {
        run(&DesktopNotifyAdapter::new(), args.watch, app, format).await
    }
}

async fn run<N: NotifyAdapter>(
    presenter: &N,
    watch: bool,
    app: &App,
    format: OutputFormat,
) -> Result<()> {
    if !watch {
        let delivered = app.spool().deliver_due(presenter).await?;
        return emit(format, || render(&delivered), &delivered);
    }

    let poll = crate::env::deliver_poll_ms().unwrap_or(DEFAULT_POLL);
    let poll_ms = duration_ms(poll);
    tracing::info!(poll_ms, "watching for due notifications");
    let mut ticker = tokio::time::interval(poll);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => break,
        }
        match app.spool().deliver_due(presenter).await {
            Ok(delivered) if delivered.is_empty() => {}
            Ok(delivered) => emit(format, || render(&delivered), &delivered)?,
            Err(e) => tracing::warn!(error = %e, "delivery pass failed"),
        }
    }
    Ok(())
}

pub fn render(delivered: &[DeliveredNotification]) -> String {
    if delivered.is_empty() {
        return "Nothing due".to_string();
    }
    let mut out = String::new();
    for notification in delivered {
        out.push_str(&format!(
            "Delivered {} at {}: {}\n",
            notification.request.id,
            timestamp(notification.delivered_at),
            notification.request.title
        ));
    }
    out
}

#[cfg(test)]
#[path = "deliver_tests.rs"]
mod tests;
