// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preference store interface.
//!
//! The engine never owns storage: it reads the first-use timestamp and the
//! opt-in flag from whatever key-value store the host application provides.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Preference keys used by the engine.
pub mod keys {
    /// Instant the application was first used.
    pub const FIRST_USE: &str = "first_app_use";
    /// Opt-in flag for tips-and-features (engagement) notifications.
    pub const ENGAGEMENT_NOTIFICATIONS: &str = "notifications.tips_and_features";
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to persist preference {key}: {message}")]
    WriteFailed { key: String, message: String },
}

/// A stored preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PrefValue {
    Timestamp(DateTime<Utc>),
    Bool(bool),
}

/// Key-value store supporting timestamp and boolean values.
///
/// Reads are infallible: a missing key, or a key holding a value of another
/// type, reads as absent.
pub trait PreferenceStore: Send + Sync {
    fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>>;
    fn set_timestamp(&self, key: &str, at: DateTime<Utc>) -> Result<(), PrefsError>;
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn set_bool(&self, key: &str, value: bool) -> Result<(), PrefsError>;
    fn remove(&self, key: &str) -> Result<(), PrefsError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        (**self).get_timestamp(key)
    }

    fn set_timestamp(&self, key: &str, at: DateTime<Utc>) -> Result<(), PrefsError> {
        (**self).set_timestamp(key, at)
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        (**self).get_bool(key, default)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), PrefsError> {
        (**self).set_bool(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        (**self).remove(key)
    }
}

/// Record the first-use instant unless one is already stored.
///
/// Returns `true` when this call wrote the timestamp.
pub fn record_first_use(
    store: &dyn PreferenceStore,
    now: DateTime<Utc>,
) -> Result<bool, PrefsError> {
    if store.get_timestamp(keys::FIRST_USE).is_some() {
        return Ok(false);
    }
    store.set_timestamp(keys::FIRST_USE, now)?;
    Ok(true)
}

/// In-memory preference store. Clones share the same values.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    values: Arc<Mutex<BTreeMap<String, PrefValue>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BTreeMap<String, PrefValue> {
        self.values.lock().clone()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.values.lock().get(key) {
            Some(PrefValue::Timestamp(at)) => Some(*at),
            _ => None,
        }
    }

    fn set_timestamp(&self, key: &str, at: DateTime<Utc>) -> Result<(), PrefsError> {
        self.values
            .lock()
            .insert(key.to_string(), PrefValue::Timestamp(at));
        Ok(())
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.lock().get(key) {
            Some(PrefValue::Bool(value)) => *value,
            _ => default,
        }
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.values
            .lock()
            .insert(key.to_string(), PrefValue::Bool(value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        self.values.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
