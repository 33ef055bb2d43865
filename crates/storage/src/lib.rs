// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! File-backed stores: preferences and the local notification queue

mod file;
mod prefs_file;
mod queue_file;

pub use file::StoreError;
pub use prefs_file::PrefsFile;
pub use queue_file::{QueueFile, QueueState};
