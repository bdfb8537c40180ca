#![allow(unused_must_use)]
//! Tests for the task lifecycle.
//!
//! Verifies that recurrences are resolved on submission, stored with the
//! task, and recomputed on edit.

use salvo::http::StatusCode;

use super::helpers::*;

// ============================================================================
// Creation
// ============================================================================

/// ## Summary
/// A monthly task anchored on the 31st clamps to the end of shorter months.
#[test_log::test(tokio::test)]
async fn create_monthly_task_from_month_end() {
    let app = TestApp::new();

    let res = TestRequest::post(&tasks_path(None))
        .json_body(&json!({
            "name": "Pay rent",
            "start_date": "2024-01-31",
            "frequency": "monthly",
            "interval": 1,
            "end_type": "never",
        }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::CREATED);

    let created: TaskResponse = res.json();
    assert_eq!(
        res.get_header("location"),
        Some(format!("http://127.0.0.1:5800/api/tasks/{}", created.task.id).as_str())
    );
    assert_eq!(
        created.task.resolved.canonical_rule_text,
        "FREQ=MONTHLY;INTERVAL=1;DTSTART=20240131"
    );
    assert_eq!(
        created.task.resolved.preview_dates,
        vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]
    );
    assert_eq!(app.stored_count(), 1);
}

/// ## Summary
/// A count limit below the preview size shortens the preview.
#[test_log::test(tokio::test)]
async fn create_weekly_task_with_count() {
    let app = TestApp::new();

    let created = app
        .create_task(json!({
            "name": "Team sync",
            "start_date": "2024-01-01",
            "frequency": "weekly",
            "interval": 2,
            "end_type": "count",
            "count": 2,
        }))
        .await;

    assert_eq!(
        created.task.resolved.canonical_rule_text,
        "FREQ=WEEKLY;INTERVAL=2;DTSTART=20240101;COUNT=2"
    );
    assert_eq!(
        created.task.resolved.preview_dates,
        vec![date(2024, 1, 1), date(2024, 1, 15)]
    );
    assert_eq!(created.preview_labels, vec!["Mon Jan 01 2024", "Mon Jan 15 2024"]);
    assert_eq!(
        created.rfc5545,
        "DTSTART:20240101T000000Z\nRRULE:FREQ=WEEKLY;INTERVAL=2;COUNT=2"
    );
}

/// ## Summary
/// Numeric fields posted as strings, as an HTML form sends them, are accepted.
#[test_log::test(tokio::test)]
async fn create_task_with_numeric_strings() {
    let app = TestApp::new();

    let created = app
        .create_task(json!({
            "name": "Team sync",
            "start_date": "2024-01-01",
            "frequency": "weekly",
            "interval": "2",
            "end_type": "count",
            "count": " 2 ",
        }))
        .await;

    assert_eq!(
        created.task.resolved.canonical_rule_text,
        "FREQ=WEEKLY;INTERVAL=2;DTSTART=20240101;COUNT=2"
    );

    TestRequest::post(&tasks_path(None))
        .json_body(&json!({ "name": "A", "start_date": "2024-01-01", "interval": "two" }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_count(), 1);
}

/// ## Summary
/// An until date equal to the start yields a single occurrence.
#[test_log::test(tokio::test)]
async fn create_task_until_start_date() {
    let app = TestApp::new();

    let created = app
        .create_task(json!({
            "name": "One-off",
            "start_date": "2024-05-05",
            "frequency": "daily",
            "end_type": "until",
            "until": "2024-05-05",
        }))
        .await;

    assert_eq!(
        created.task.resolved.canonical_rule_text,
        "FREQ=DAILY;INTERVAL=1;DTSTART=20240505;UNTIL=20240505"
    );
    assert_eq!(created.task.resolved.preview_dates, vec![date(2024, 5, 5)]);
}

/// ## Summary
/// Rejected submissions report the reason and store nothing.
#[test_log::test(tokio::test)]
async fn create_rejections_leave_store_empty() {
    let app = TestApp::new();

    TestRequest::post(&tasks_path(None))
        .json_body(&json!({ "name": "", "start_date": "2024-01-01" }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_body_contains("Task name and start date required");

    TestRequest::post(&tasks_path(None))
        .json_body(&json!({
            "name": "Backwards",
            "start_date": "2024-03-01",
            "end_type": "until",
            "until": "2024-02-01",
        }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    TestRequest::post(&tasks_path(None))
        .json_body(&json!({
            "name": "No cutoff",
            "start_date": "2024-03-01",
            "end_type": "until",
            "until": "",
        }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    TestRequest::post(&tasks_path(None))
        .header("Content-Type", "application/json")
        .body("not json")
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(app.stored_count(), 0);
}

// ============================================================================
// Editing
// ============================================================================

/// ## Summary
/// Editing through the prefilled form recomputes the stored recurrence.
#[test_log::test(tokio::test)]
async fn edit_through_prefilled_form() {
    let app = TestApp::new();
    let created = app
        .create_task(json!({
            "name": "Dentist",
            "start_date": "2023-03-31",
            "frequency": "monthly",
            "interval": 6,
            "end_type": "count",
            "count": 4,
        }))
        .await;
    assert_eq!(
        created.task.resolved.preview_dates,
        vec![date(2023, 3, 31), date(2023, 9, 30), date(2024, 3, 31)]
    );

    let id = created.task.id;
    let mut form: serde_json::Value = TestRequest::get(&format!("{}/form", tasks_path(Some(id))))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(form["frequency"], "monthly");
    assert_eq!(form["interval"], 6);
    assert_eq!(form["end_type"], "count");
    assert_eq!(form["count"], 4);

    form["interval"] = json!(12);
    let updated: TaskResponse = TestRequest::put(&tasks_path(Some(id)))
        .json_body(&form)
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(updated.task.id, id);
    assert_eq!(updated.task.created_at, created.task.created_at);
    assert_eq!(
        updated.task.resolved.preview_dates,
        vec![date(2023, 3, 31), date(2024, 3, 31), date(2025, 3, 31)]
    );

    let fetched: TaskResponse = TestRequest::get(&tasks_path(Some(id)))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched.task, updated.task);
}

// ============================================================================
// Listing and deletion
// ============================================================================

/// ## Summary
/// Tasks are listed in creation order and disappear once deleted.
#[test_log::test(tokio::test)]
async fn list_and_delete() {
    let app = TestApp::new();
    let first = app
        .create_task(json!({ "name": "First", "start_date": "2024-01-01" }))
        .await;
    let second = app
        .create_task(json!({ "name": "Second", "start_date": "2024-01-02" }))
        .await;

    let listed: Vec<TaskResponse> = TestRequest::get(&tasks_path(None))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let names: Vec<_> = listed.iter().map(|t| t.task.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);

    TestRequest::delete(&tasks_path(Some(first.task.id)))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NO_CONTENT)
        .assert_body_empty();

    let listed: Vec<TaskResponse> = TestRequest::get(&tasks_path(None))
        .send(&app.service)
        .await
        .json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].task.id, second.task.id);

    TestRequest::delete(&tasks_path(Some(first.task.id)))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Each service has its own store.
#[test_log::test(tokio::test)]
async fn stores_are_isolated() {
    let a = TestApp::new();
    let b = TestApp::new();

    a.create_task(json!({ "name": "Only in a", "start_date": "2024-01-01" }))
        .await;

    assert_eq!(a.stored_count(), 1);
    assert_eq!(b.stored_count(), 0);
}
