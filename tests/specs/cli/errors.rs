//! CLI error specs

use crate::prelude::*;

#[test]
fn unknown_permission_state_is_rejected() {
    let device = Device::new();
    device
        .reengage()
        .args(&["permission", "set", "sometimes"])
        .fails()
        .stderr_has("unknown authorization state: sometimes");
}

#[test]
fn invalid_config_fails_with_path() {
    let device = Device::new();
    device.file("config.toml", "window_unit_secs = 0\n");
    device
        .reengage()
        .args(&["launch"])
        .fails()
        .stderr_has("invalid config")
        .stderr_has("config.toml");
}

#[test]
fn unknown_config_key_is_rejected() {
    let device = Device::new();
    device.file("config.toml", "window = 3\n");
    device
        .reengage()
        .args(&["status"])
        .fails()
        .stderr_has("invalid config");
}
