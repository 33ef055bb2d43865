// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-file preference store.
//!
//! Values are held in memory and written through on every change, so reads
//! never touch the disk after [`PrefsFile::open`].

use crate::file::{load_json, save_json};
use crate::StoreError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use reengage_core::{PrefValue, PreferenceStore, PrefsError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const PREFS_VERSION: u32 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsDocument {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    values: BTreeMap<String, PrefValue>,
}

pub struct PrefsFile {
    path: PathBuf,
    values: Mutex<BTreeMap<String, PrefValue>>,
}

impl PrefsFile {
    /// Open the store at `path`. A missing or corrupt file opens empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let document: PrefsDocument = load_json(&path)?.unwrap_or_default();
        Ok(Self {
            path,
            values: Mutex::new(document.values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(
        &self,
        key: &str,
        change: impl FnOnce(&mut BTreeMap<String, PrefValue>),
    ) -> Result<(), PrefsError> {
        let mut values = self.values.lock();
        let mut next = values.clone();
        change(&mut next);

        let document = PrefsDocument {
            version: PREFS_VERSION,
            values: next,
        };
        save_json(&self.path, &document).map_err(|e| PrefsError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        *values = document.values;
        Ok(())
    }
}

impl PreferenceStore for PrefsFile {
    fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.values.lock().get(key) {
            Some(PrefValue::Timestamp(at)) => Some(*at),
            _ => None,
        }
    }

    fn set_timestamp(&self, key: &str, at: DateTime<Utc>) -> Result<(), PrefsError> {
        self.write(key, |values| {
            values.insert(key.to_string(), PrefValue::Timestamp(at));
        })
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.lock().get(key) {
            Some(PrefValue::Bool(value)) => *value,
            _ => default,
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.write(key, |values| {
            values.insert(key.to_string(), PrefValue::Bool(value));
        })
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        self.write(key, |values| {
            values.remove(key);
        })
    }
}

#[cfg(test)]
#[path = "prefs_file_tests.rs"]
mod tests;
