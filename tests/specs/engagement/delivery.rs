//! Delivery of due notifications

use crate::prelude::*;

#[test]
fn nothing_due_before_fire_time() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();
    device
        .at_hours(47)
        .reengage()
        .args(&["deliver", "--quiet"])
        .passes()
        .stdout_eq("Nothing due\n");
}

#[test]
fn due_notification_is_delivered_once() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();

    device
        .at_hours(48)
        .reengage()
        .args(&["deliver", "--quiet"])
        .passes()
        .stdout_eq(
            "Delivered engagement-notification at 2026-01-03T00:00:00Z: Pick up where you left off\n",
        );
    device
        .reengage()
        .args(&["deliver", "--quiet"])
        .passes()
        .stdout_eq("Nothing due\n");
    device
        .reengage()
        .args(&["status"])
        .passes()
        .stdout_has("Pending (0):")
        .stdout_has("Delivered (1):");
}

#[test]
fn clear_dismisses_delivered() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();
    device
        .at_hours(50)
        .reengage()
        .args(&["deliver", "--quiet"])
        .passes();

    device
        .reengage()
        .args(&["clear"])
        .passes()
        .stdout_eq("Cleared 1 delivered notification\n");
    device
        .reengage()
        .args(&["status"])
        .passes()
        .stdout_has("Delivered (0):");
}

#[test]
fn due_without_permission_is_dropped() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();
    device
        .reengage()
        .args(&["permission", "set", "denied"])
        .passes();

    device
        .at_hours(48)
        .reengage()
        .args(&["deliver", "--quiet"])
        .passes()
        .stdout_eq("Nothing due\n");
    device
        .reengage()
        .args(&["status"])
        .passes()
        .stdout_has("Pending (0):")
        .stdout_has("Delivered (0):");
}
