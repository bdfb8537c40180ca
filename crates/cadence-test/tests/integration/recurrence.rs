#![allow(unused_must_use)]
//! Tests for the stateless recurrence endpoints.

use salvo::http::StatusCode;

use super::helpers::*;

/// ## Summary
/// Previewing a form stores nothing.
#[test_log::test(tokio::test)]
async fn preview_does_not_store() {
    let app = TestApp::new();

    let preview: PreviewResponse = TestRequest::post(&recurrence_path("preview"))
        .json_body(&json!({
            "name": "Anniversary",
            "start_date": "2024-02-29",
            "frequency": "yearly",
        }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(
        preview.resolved.canonical_rule_text,
        "FREQ=YEARLY;INTERVAL=1;DTSTART=20240229"
    );
    assert_eq!(
        preview.resolved.preview_dates,
        vec![date(2024, 2, 29), date(2025, 2, 28), date(2026, 2, 28)]
    );
    assert_eq!(app.stored_count(), 0);
}

/// ## Summary
/// Rule text from a stored task resolves to the same recurrence.
#[test_log::test(tokio::test)]
async fn stored_rule_text_parses_back() {
    let app = TestApp::new();
    let created = app
        .create_task(json!({
            "name": "Quarterly report",
            "start_date": "2023-12-31",
            "frequency": "monthly",
            "interval": 3,
            "end_type": "until",
            "until": "2024-12-31",
        }))
        .await;

    let parsed: PreviewResponse = TestRequest::post(&recurrence_path("parse"))
        .json_body(&json!({ "rule": created.task.resolved.canonical_rule_text }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(parsed.spec, created.task.spec);
    assert_eq!(parsed.resolved, created.task.resolved);
    assert_eq!(
        parsed.resolved.preview_dates,
        vec![date(2023, 12, 31), date(2024, 3, 31), date(2024, 6, 30)]
    );
}

/// ## Summary
/// Malformed rule text is a bad request; a well-formed but invalid rule is
/// unprocessable.
#[test_log::test(tokio::test)]
async fn parse_rejections() {
    let app = TestApp::new();

    for rule in [
        "FREQ=DAILY;INTERVAL=1",
        "FREQ=DAILY;DTSTART=20240101;COUNT=2;UNTIL=20240105",
        "FREQ=DAILY;DTSTART=20240230",
        "FREQ=DAILY;DTSTART=20240101;BYDAY=MO",
    ] {
        TestRequest::post(&recurrence_path("parse"))
            .json_body(&json!({ "rule": rule }))
            .send(&app.service)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    for rule in [
        "FREQ=HOURLY;DTSTART=20240101",
        "FREQ=DAILY;DTSTART=20240101;COUNT=0",
        "FREQ=DAILY;DTSTART=20240101;UNTIL=20231231",
    ] {
        TestRequest::post(&recurrence_path("parse"))
            .json_body(&json!({ "rule": rule }))
            .send(&app.service)
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

/// ## Summary
/// The healthcheck answers without touching the store.
#[test_log::test(tokio::test)]
async fn healthcheck() {
    let app = TestApp::new();

    TestRequest::get("/api/app/healthcheck")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("\"status\":\"ok\"");
}
