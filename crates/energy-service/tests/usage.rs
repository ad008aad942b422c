//! Account usage integration tests.

mod common;

use axum::http::StatusCode;
use common::{TestHarness, COMMERCIAL, RESIDENTIAL};
use serde_json::{json, Value};

const JANUARY: &str = "start_date=2024-01-01&end_date=2024-01-31";

fn usage_rows(body: &Value) -> &Vec<Value> {
    body["usage_details"]["accounts"].as_array().unwrap()
}

// ============================================================================
// Successful queries
// ============================================================================

#[tokio::test]
async fn staff_sees_masked_account_number() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get(&format!("/api/usage?account_no={RESIDENTIAL}&{JANUARY}"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let rows = usage_rows(&body);
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r["account_no"] == "******7890"));
}

#[tokio::test]
async fn executive_sees_full_account_number() {
    let harness = TestHarness::new();

    let body: Value = harness
        .server
        .get(&format!(
            "/api/usage?account_no={RESIDENTIAL}&{JANUARY}&role=Executive"
        ))
        .await
        .json();

    assert!(usage_rows(&body)
        .iter()
        .all(|r| r["account_no"] == RESIDENTIAL));
}

#[tokio::test]
async fn response_echoes_range_and_carries_every_interval() {
    let harness = TestHarness::new();

    let body: Value = harness
        .server
        .get(&format!("/api/usage?account_no={COMMERCIAL}&{JANUARY}"))
        .await
        .json();

    assert_eq!(
        body["usage_details"]["date_range"],
        json!({ "start_date": "2024-01-01", "end_date": "2024-01-31" })
    );

    let rows = usage_rows(&body);
    assert_eq!(rows.len(), 1);
    let row = rows[0].as_object().unwrap();
    assert_eq!(row.len(), 52);
    let reading = |label: &str| row[label].as_f64().unwrap();
    assert!((reading("00:00") - 5.0).abs() < 1e-9);
    assert!((reading("00:30") - 5.01).abs() < 1e-9);
    assert!((reading("23:30") - 5.47).abs() < 1e-9);
    assert_eq!(row["substation"], "S2");
    assert_eq!(row["transformer"], "T3");
    assert_eq!(row["date"], "2024-01-01");
}

#[tokio::test]
async fn range_is_inclusive_and_ordered_by_date() {
    let harness = TestHarness::new();

    let body: Value = harness
        .server
        .get(&format!(
            "/api/usage?account_no={RESIDENTIAL}&start_date=2024-01-02&end_date=2024-01-04"
        ))
        .await
        .json();

    let dates: Vec<_> = usage_rows(&body).iter().map(|r| r["date"].clone()).collect();
    assert_eq!(dates, [json!("2024-01-02"), json!("2024-01-03"), json!("2024-01-04")]);
}

#[tokio::test]
async fn usage_paginates() {
    let harness = TestHarness::new();

    let body: Value = harness
        .server
        .get(&format!(
            "/api/usage?account_no={RESIDENTIAL}&{JANUARY}&page=2&limit=2"
        ))
        .await
        .json();

    let dates: Vec<_> = usage_rows(&body).iter().map(|r| r["date"].clone()).collect();
    assert_eq!(dates, [json!("2024-01-03"), json!("2024-01-04")]);
}

#[tokio::test]
async fn timestamps_are_accepted_and_echoed_verbatim() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get(&format!(
            "/api/usage?account_no={COMMERCIAL}&start_date=2024-01-01T00:00:00Z&end_date=2024-01-01"
        ))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["usage_details"]["date_range"]["start_date"],
        "2024-01-01T00:00:00Z"
    );
    assert_eq!(usage_rows(&body).len(), 1);
}

#[tokio::test]
async fn unknown_account_returns_empty_list() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get(&format!("/api/usage?account_no=0000000000&{JANUARY}"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(usage_rows(&body).is_empty());
    assert!(harness.audit_entries().is_empty());
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn missing_end_date_is_rejected_without_querying_store() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get(&format!("/api/usage?account_no={RESIDENTIAL}&start_date=2024-01-01"))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body, json!({ "errors": ["Invalid end_date"] }));
    assert_eq!(harness.store.usage_query_count(), 0);
}

#[tokio::test]
async fn every_failing_field_is_reported() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/usage?start_date=not-a-date")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(
        body["errors"],
        json!(["Missing account_no", "Invalid start_date", "Invalid end_date"])
    );
}

#[tokio::test]
async fn rejected_request_is_audited_once() {
    let harness = TestHarness::new();

    harness
        .server
        .get("/api/usage?account_no=42&start_date=2024-01-01&end_date=someday&role=Executive")
        .await
        .assert_status_bad_request();

    let entries = harness.audit_entries();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(
        entry["input"],
        json!({
            "account_no": "42",
            "start_date": "2024-01-01",
            "end_date": "someday",
            "role": "Executive"
        })
    );
    assert_eq!(entry["errors"], json!(["Invalid end_date"]));
    assert!(entry["timestamp"].is_string());
}

#[tokio::test]
async fn each_rejection_appends_a_line() {
    let harness = TestHarness::new();

    for _ in 0..3 {
        harness
            .server
            .get("/api/usage")
            .await
            .assert_status_bad_request();
    }

    assert_eq!(harness.audit_entries().len(), 3);
}

#[tokio::test]
async fn repeated_key_is_rejected_with_envelope_and_audited() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/usage?account_no=1&account_no=2&start_date=2024-01-01")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body, json!({ "errors": ["Invalid end_date"] }));

    let entries = harness.audit_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["input"]["account_no"], "2");
    assert_eq!(harness.store.usage_query_count(), 0);
}

#[tokio::test]
async fn undecodable_bytes_are_still_audited() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/usage?account_no=%FF%FE&start_date=%E0%A4")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body, json!({ "errors": ["Invalid start_date", "Invalid end_date"] }));
    assert_eq!(harness.audit_entries().len(), 1);
}

#[tokio::test]
async fn audit_failure_does_not_change_response() {
    let harness = TestHarness::with_unwritable_audit_log();

    let response = harness.server.get("/api/usage?account_no=42").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "errors": ["Invalid start_date", "Invalid end_date"] })
    );
    assert!(!harness.audit_log.exists());
}

#[tokio::test]
async fn valid_request_is_not_audited() {
    let harness = TestHarness::new();

    harness
        .server
        .get(&format!("/api/usage?account_no={RESIDENTIAL}&{JANUARY}"))
        .await
        .assert_status_ok();

    assert!(harness.audit_entries().is_empty());
}

// ============================================================================
// Storage failures
// ============================================================================

#[tokio::test]
async fn storage_failure_returns_500() {
    let harness = TestHarness::failing("connection reset", false);

    let response = harness
        .server
        .get(&format!("/api/usage?account_no={RESIDENTIAL}&{JANUARY}"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "internal storage error" }));
}

#[tokio::test]
async fn validation_runs_before_storage() {
    let harness = TestHarness::failing("connection reset", false);

    harness
        .server
        .get("/api/usage?account_no=1")
        .await
        .assert_status_bad_request();

    assert_eq!(harness.store.usage_query_count(), 0);
}
