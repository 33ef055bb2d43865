// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spool file holding the local notification queue.
//!
//! The queue lives outside any single process: one invocation schedules a
//! notification, a later one delivers it, and `deliver --watch` may run
//! alongside both. Every operation re-reads the file under an advisory lock
//! on a sidecar `.lock` file: shared for reads, exclusive for the whole
//! load, change and save of an update.

use crate::file::{load_json, save_json};
use crate::StoreError;
use fs2::FileExt;
use parking_lot::Mutex;
use reengage_core::{
    AuthorizationOptions, AuthorizationState, DeliveredNotification, PendingNotification,
};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

const QUEUE_VERSION: u32 = 1;

/// Everything the platform knows about this app's notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueState {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub authorization: AuthorizationState,
    /// Options granted with the last authorization request.
    #[serde(default)]
    pub options: AuthorizationOptions,
    #[serde(default)]
    pub pending: Vec<PendingNotification>,
    #[serde(default)]
    pub delivered: Vec<DeliveredNotification>,
}

/// Advisory lock held until dropped.
struct FileLock(File);

impl FileLock {
    fn acquire(path: &Path, exclusive: bool) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        if exclusive {
            FileExt::lock_exclusive(&file)?;
        } else {
            FileExt::lock_shared(&file)?;
        }
        Ok(Self(file))
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.0);
    }
}

pub struct QueueFile {
    path: PathBuf,
    lock_path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl QueueFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            lock_path: path.with_extension("lock"),
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current queue state; a missing or corrupt file reads as empty.
    pub fn load(&self) -> Result<QueueState, StoreError> {
        let _guard = self.lock.lock();
        let _file_lock = FileLock::acquire(&self.lock_path, false)?;
        Ok(load_json(&self.path)?.unwrap_or_default())
    }

    /// Apply `change` to the stored state and persist the result.
    ///
    /// Other processes block on the queue until the new state is saved, so
    /// no concurrent update is lost.
    pub fn update<R>(&self, change: impl FnOnce(&mut QueueState) -> R) -> Result<R, StoreError> {
        let _guard = self.lock.lock();
        let _file_lock = FileLock::acquire(&self.lock_path, true)?;
        let mut state: QueueState = load_json(&self.path)?.unwrap_or_default();
        let result = change(&mut state);
        state.version = QUEUE_VERSION;
        save_json(&self.path, &state)?;
        Ok(result)
    }
}

#[cfg(test)]
#[path = "queue_file_tests.rs"]
mod tests;
