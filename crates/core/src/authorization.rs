// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification authorization state as reported by the platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's decision about local notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationState {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    Denied,
    Authorized,
    /// Quiet delivery granted without an explicit prompt.
    Provisional,
    /// Granted for a limited session.
    Ephemeral,
}

impl AuthorizationState {
    /// Collapse to a boolean: may notifications be delivered?
    pub fn allows_delivery(self) -> bool {
        match self {
            AuthorizationState::Authorized
            | AuthorizationState::Provisional
            | AuthorizationState::Ephemeral => true,
            AuthorizationState::NotDetermined | AuthorizationState::Denied => false,
        }
    }

    /// Whether the user has already answered (or the system answered for them).
    pub fn is_determined(self) -> bool {
        self != AuthorizationState::NotDetermined
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthorizationState::NotDetermined => "not_determined",
            AuthorizationState::Denied => "denied",
            AuthorizationState::Authorized => "authorized",
            AuthorizationState::Provisional => "provisional",
            AuthorizationState::Ephemeral => "ephemeral",
        }
    }
}

impl fmt::Display for AuthorizationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorizationState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "not_determined" => Ok(AuthorizationState::NotDetermined),
            "denied" => Ok(AuthorizationState::Denied),
            "authorized" => Ok(AuthorizationState::Authorized),
            "provisional" => Ok(AuthorizationState::Provisional),
            "ephemeral" => Ok(AuthorizationState::Ephemeral),
            other => Err(format!("unknown authorization state: {other}")),
        }
    }
}

/// What the app asks permission for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self {
            alert: true,
            badge: true,
            sound: true,
        }
    }
}

/// Authorization plus the per-feature settings granted with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub authorization: AuthorizationState,
    pub alert_enabled: bool,
    pub badge_enabled: bool,
    pub sound_enabled: bool,
}

impl NotificationSettings {
    /// Settings for `state`, with features enabled only when delivery is allowed.
    pub fn for_state(state: AuthorizationState, options: AuthorizationOptions) -> Self {
        let allowed = state.allows_delivery();
        Self {
            authorization: state,
            alert_enabled: allowed && options.alert,
            badge_enabled: allowed && options.badge,
            sound_enabled: allowed && options.sound,
        }
    }
}

#[cfg(test)]
#[path = "authorization_tests.rs"]
mod tests;
