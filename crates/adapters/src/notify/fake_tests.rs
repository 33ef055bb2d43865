// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use reengage_core::Trigger;
use std::time::Duration;

fn request(id: &str, title: &str) -> NotificationRequest {
    NotificationRequest::new(id, title, "body", Trigger::interval(Duration::from_secs(1)))
}

#[tokio::test]
async fn fake_notify_records_calls() {
    let adapter = FakeNotifyAdapter::new();

    adapter.notify(&request("a", "First")).await.unwrap();
    adapter.notify(&request("b", "Second")).await.unwrap();

    let calls = adapter.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].id, "a");
    assert_eq!(calls[0].title, "First");
    assert_eq!(calls[1].body, "body");
}

#[tokio::test]
async fn failing_fake_records_nothing() {
    let adapter = FakeNotifyAdapter::new();
    adapter.set_failing(true);

    assert!(adapter.notify(&request("a", "First")).await.is_err());
    assert!(adapter.calls().is_empty());
}
