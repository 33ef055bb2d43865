//! Settings screen specs

use crate::prelude::*;

#[test]
fn defaults_before_first_launch() {
    let device = Device::new();
    device.reengage().args(&["prefs", "show"]).passes().stdout_eq(
        "First use:                  not recorded\n\
         Engagement notifications:   on\n",
    );
}

#[test]
fn opt_out_stops_scheduling() {
    let device = Device::authorized();
    device
        .reengage()
        .args(&["prefs", "opt-out"])
        .passes()
        .stdout_has("Engagement notifications:   off");
    device
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_has("No action: opted out");
}

#[test]
fn opting_back_in_schedules_again() {
    let device = Device::authorized();
    device.reengage().args(&["prefs", "opt-out"]).passes();
    device.reengage().args(&["launch"]).passes();
    device.reengage().args(&["prefs", "opt-in"]).passes();
    device
        .at_hours(2)
        .reengage()
        .args(&["check"])
        .passes()
        .stdout_eq("Engagement notification scheduled for 2026-01-03T00:00:00Z (in 1d22h)\n");
}

#[test]
fn reset_first_use_restarts_the_windows() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();
    device
        .at_hours(72)
        .reengage()
        .args(&["prefs", "reset-first-use"])
        .passes()
        .stdout_has("not recorded");
    device
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_has("First use recorded at 2026-01-04T00:00:00Z");
}

#[test]
fn first_use_survives_relaunch() {
    let device = Device::new();
    device.reengage().args(&["launch"]).passes();
    device
        .at_hours(5)
        .reengage()
        .args(&["launch"])
        .passes()
        .stdout_lacks("First use recorded");
    device
        .reengage()
        .args(&["prefs", "show"])
        .passes()
        .stdout_has("2026-01-01T00:00:00Z (5h ago)");
}
