// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! reengage - re-engagement notification CLI

mod app;
mod commands;
mod env;
mod output;

use anyhow::{Context, Result};
use app::{App, AppClock, StatePaths};
use clap::{CommandFactory, Parser, Subcommand};
use commands::{clear, deliver, engage, permission, prefs, status};
use output::OutputFormat;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "reengage",
    version,
    about = "Re-engagement notifications for a host app"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// App came to the foreground: record first use and schedule
    Launch,
    /// Run the scheduler once without recording first use
    Check,
    /// Engagement preferences
    Prefs(prefs::PrefsArgs),
    /// Notification permission
    Permission(permission::PermissionArgs),
    /// Present notifications that have come due
    Deliver(deliver::DeliverArgs),
    /// Show engagement state and the notification queue
    Status,
    /// Dismiss delivered notifications
    Clear,
}

fn cli_command() -> clap::Command {
    Cli::command()
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, dropping causes already present in the top message.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let paths = StatePaths::from_env()?;
    let _log_guard = setup_logging(&paths.log)?;
    let app = App::open(paths, AppClock::from_env())?;
    tracing::debug!(state_dir = %app.state_dir().display(), "opened state");

    match command {
        Commands::Launch => engage::launch(&app, format).await?,
        Commands::Check => engage::check(&app, format).await?,
        Commands::Prefs(args) => prefs::handle(args.command, &app, format)?,
        Commands::Permission(args) => permission::handle(args.command, &app, format).await?,
        Commands::Deliver(args) => deliver::handle(args, &app, format).await?,
        Commands::Status => status::handle(&app, format).await?,
        Commands::Clear => clear::handle(&app, format).await?,
    }

    Ok(())
}

/// Log to `log_path` so stdout stays clean for command output.
fn setup_logging(log_path: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let dir = log_path.parent().context("log path has no directory")?;
    let file_name = log_path.file_name().context("log path has no file name")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
