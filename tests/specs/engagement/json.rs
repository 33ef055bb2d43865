//! JSON output specs

use crate::prelude::*;

#[test]
fn launch_reports_decision() {
    let device = Device::authorized();
    let report = device.json(&["launch"]);
    assert_eq!(report["first_use_recorded"], "2026-01-01T00:00:00Z");
    assert_eq!(report["decision"]["action"], "schedule");
    assert_eq!(report["decision"]["fire_at"], "2026-01-03T00:00:00Z");
}

#[test]
fn skip_reports_reason() {
    let device = Device::new();
    let report = device.json(&["check"]);
    assert_eq!(report["decision"]["action"], "skip");
    assert_eq!(report["decision"]["reason"], "no_first_use");
}

#[test]
fn status_lists_pending_requests() {
    let device = Device::authorized();
    device.reengage().args(&["launch"]).passes();

    let status = device.at_hours(12).json(&["status"]);
    assert_eq!(status["phase"], "window1");
    assert_eq!(status["authorization"], "authorized");
    assert_eq!(status["opted_in"], true);
    assert_eq!(status["next"]["action"], "schedule");

    let pending = status["pending"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["request"]["id"], "engagement-notification");
    assert_eq!(pending[0]["request"]["repeats"], false);
    assert_eq!(pending[0]["request"]["trigger"]["kind"], "date");
}

#[test]
fn permission_show_reports_settings() {
    let device = Device::new();
    let settings = device.json(&["permission", "show"]);
    assert_eq!(settings["authorization"], "not_determined");
    assert_eq!(settings["alert_enabled"], false);
}
