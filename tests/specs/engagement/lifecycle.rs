//! Engagement scheduling across the first days after install

use crate::prelude::*;

#[test]
fn first_launch_without_permission_only_records_first_use() {
    let device = Device::new();
    device.reengage().args(&["launch"]).passes().stdout_eq(
        "First use recorded at 2026-01-01T00:00:00Z\n\
         No action: no notification permission\n",
    );
    device
        .reengage()
        .args(&["status"])
        .passes()
        .stdout_has("Pending (0):");
}

#[test]
fn first_launch_with_permission_schedules_for_day_two() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes().stdout_eq(
        "First use recorded at 2026-01-01T00:00:00Z\n\
         Engagement notification scheduled for 2026-01-03T00:00:00Z (in 2d)\n",
    );
}

#[test]
fn relaunch_on_day_one_keeps_fire_time_and_one_pending() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();

    device.at_hours(12).reengage().args(&["launch"]).passes().stdout_eq(
        "Engagement notification scheduled for 2026-01-03T00:00:00Z (in 1d12h)\n",
    );
    device
        .reengage()
        .args(&["status"])
        .passes()
        .stdout_has("Pending (1):\n  engagement-notification  fires 2026-01-03T00:00:00Z (in 1d12h)\n");
}

#[test]
fn launch_on_day_two_cancels() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();

    device
        .at_hours(36)
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_eq("Engagement notification cancelled\n");
    device
        .reengage()
        .args(&["status"])
        .passes()
        .stdout_has("Pending (0):");
}

#[test]
fn exactly_one_day_counts_as_day_two() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();
    device
        .at_hours(24)
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_eq("Engagement notification cancelled\n");
}

#[test]
fn launch_after_day_two_does_nothing() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();

    device
        .at_hours(96)
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_eq("No action: past engagement windows\n");
    // Nothing cancelled the notification scheduled at first launch.
    device
        .reengage()
        .args(&["status"])
        .passes()
        .stdout_has("Pending (1):");
}

#[test]
fn check_without_first_use_records_nothing() {
    let device = Device::authorized();
    device
        .reengage()
        .args(&["check"])
        .passes()
        .stdout_eq("No action: first use not recorded\n");
    device
        .reengage()
        .args(&["prefs", "show"])
        .passes()
        .stdout_has("not recorded");
}

#[test]
fn revoked_permission_leaves_pending_notification_alone() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();
    device
        .reengage()
        .args(&["permission", "set", "denied"])
        .passes();

    device
        .at_hours(30)
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_eq("No action: no notification permission\n");
    device
        .reengage()
        .args(&["status"])
        .passes()
        .stdout_has("Pending (1):");
}

#[test]
fn requested_permission_is_granted_on_desktop() {
    let device = Device::new();
    device
        .reengage()
        .args(&["permission", "request"])
        .passes()
        .stdout_has("Permission: authorized (delivery allowed)");
    device
        .at_hours(1)
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_has("scheduled for 2026-01-03T01:00:00Z");
}

#[test]
fn configured_windows_are_used() {
    let device = Device::authorized();
    device.file(
        "config.toml",
        "window_unit_secs = 3600\ntarget_offset_secs = 5400\ntitle = \"Hi\"\n",
    );
    device.reengage().args(&["launch"]).passes().stdout_has(
        "Engagement notification scheduled for 2026-01-01T01:30:00Z (in 1h30m)",
    );
    device
        .at_hours(1)
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_eq("Engagement notification cancelled\n");
}

#[test]
fn scheduling_is_logged() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();
    let log = device.log();
    assert!(
        log.contains("scheduling engagement notification"),
        "log: {log}"
    );
}
