// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

struct EnvGuard(Vec<(&'static str, Option<String>)>);

impl EnvGuard {
    fn set(vars: &[(&'static str, Option<&str>)]) -> Self {
        let saved = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();
        for (k, v) in vars {
            match v {
                Some(v) => std::env::set_var(k, v),
                None => std::env::remove_var(k),
            }
        }
        EnvGuard(saved)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (k, v) in &self.0 {
            match v {
                Some(v) => std::env::set_var(k, v),
                None => std::env::remove_var(k),
            }
        }
    }
}

#[test]
#[serial(env)]
fn state_dir_prefers_explicit_override() {
    let _guard = EnvGuard::set(&[
        ("REENGAGE_STATE_DIR", Some("/tmp/reengage-state")),
        ("XDG_STATE_HOME", Some("/tmp/xdg")),
    ]);
    assert_eq!(state_dir(), Some(PathBuf::from("/tmp/reengage-state")));
}

#[test]
#[serial(env)]
fn state_dir_falls_back_to_xdg() {
    let _guard = EnvGuard::set(&[
        ("REENGAGE_STATE_DIR", None),
        ("XDG_STATE_HOME", Some("/tmp/xdg")),
    ]);
    assert_eq!(state_dir(), Some(PathBuf::from("/tmp/xdg/reengage")));
}

#[test]
#[serial(env)]
fn empty_override_is_ignored() {
    let _guard = EnvGuard::set(&[
        ("REENGAGE_STATE_DIR", Some("")),
        ("XDG_STATE_HOME", Some("/tmp/xdg")),
    ]);
    assert_eq!(state_dir(), Some(PathBuf::from("/tmp/xdg/reengage")));
}

#[yare::parameterized(
    unset   = { None,                   None },
    valid   = { Some("1767225600000"),  Some(1_767_225_600_000) },
    padded  = { Some(" 42 "),           Some(42) },
    garbage = { Some("yesterday"),      None },
)]
#[serial(env)]
fn now_ms_parses(raw: Option<&str>, expected: Option<u64>) {
    let _guard = EnvGuard::set(&[("REENGAGE_NOW_MS", raw)]);
    assert_eq!(now_ms(), expected);
}

#[test]
#[serial(env)]
fn zero_poll_interval_is_ignored() {
    let _guard = EnvGuard::set(&[("REENGAGE_DELIVER_POLL_MS", Some("0"))]);
    assert_eq!(deliver_poll_ms(), None);
}
