// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod clear;
pub mod deliver;
pub mod engage;
pub mod permission;
pub mod prefs;
pub mod status;
