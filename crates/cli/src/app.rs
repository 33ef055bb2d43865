// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wiring for one CLI invocation: state paths, stores, clock and the
//! notification stack.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reengage_adapters::{SpoolNotificationCenter, TracedCenter};
use reengage_core::clock::from_epoch_ms;
use reengage_core::{Clock, FakeClock, SystemClock};
use reengage_engine::{EngagementConfig, EngagementScheduler, NotificationManager};
use reengage_storage::PrefsFile;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type Center = TracedCenter<SpoolNotificationCenter<AppClock>>;
pub type Service = NotificationManager<Center>;
pub type Scheduler = EngagementScheduler<Service, Arc<PrefsFile>, AppClock>;

/// Files kept under the state directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub dir: PathBuf,
    pub prefs: PathBuf,
    pub queue: PathBuf,
    pub config: PathBuf,
    pub log: PathBuf,
}

impl StatePaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            prefs: dir.join("prefs.json"),
            queue: dir.join("queue.json"),
            config: dir.join("config.toml"),
            log: dir.join("reengage.log"),
            dir,
        }
    }

    /// Paths under the directory chosen by the environment.
    pub fn from_env() -> Result<Self> {
        let dir = crate::env::state_dir()
            .context("cannot determine state directory (set REENGAGE_STATE_DIR)")?;
        Ok(Self::new(dir))
    }
}

/// Wall clock, or a fixed instant when `REENGAGE_NOW_MS` is set.
#[derive(Clone)]
pub enum AppClock {
    System(SystemClock),
    Fixed(FakeClock),
}

impl AppClock {
    pub fn from_env() -> Self {
        match crate::env::now_ms() {
            Some(ms) => AppClock::Fixed(FakeClock::at(from_epoch_ms(ms))),
            None => AppClock::System(SystemClock),
        }
    }
}

impl Clock for AppClock {
    fn now(&self) -> DateTime<Utc> {
        match self {
            AppClock::System(clock) => clock.now(),
            AppClock::Fixed(clock) => clock.now(),
        }
    }
}

pub struct App {
    pub paths: StatePaths,
    pub clock: AppClock,
    pub prefs: Arc<PrefsFile>,
    pub config: EngagementConfig,
    service: Service,
}

impl App {
    pub fn open(paths: StatePaths, clock: AppClock) -> Result<Self> {
        std::fs::create_dir_all(&paths.dir)
            .with_context(|| format!("failed to create {}", paths.dir.display()))?;

        let config = EngagementConfig::load(&paths.config)
            .with_context(|| format!("invalid config {}", paths.config.display()))?;
        let prefs = PrefsFile::open(&paths.prefs)
            .with_context(|| format!("failed to open {}", paths.prefs.display()))?;
        let center = TracedCenter::new(SpoolNotificationCenter::new(&paths.queue, clock.clone()));

        Ok(Self {
            service: NotificationManager::new(center),
            prefs: Arc::new(prefs),
            config,
            clock,
            paths,
        })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    /// The spool under the tracing wrapper, for delivery and settings changes.
    pub fn spool(&self) -> &SpoolNotificationCenter<AppClock> {
        self.service.center().inner()
    }

    pub fn scheduler(&self) -> Scheduler {
        EngagementScheduler::new(
            self.service.clone(),
            Arc::clone(&self.prefs),
            self.clock.clone(),
            self.config.clone(),
        )
    }

    pub fn state_dir(&self) -> &Path {
        &self.paths.dir
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
