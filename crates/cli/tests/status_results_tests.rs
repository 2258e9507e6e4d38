//! Integration tests for `splunk-cli status` and `splunk-cli results`.

mod common;

use common::*;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn status_body(sid: &str, done: bool, progress: f64) -> serde_json::Value {
    serde_json::json!({
        "entry": [{
            "name": "search",
            "content": {
                "sid": sid,
                "doneProgress": progress,
                "resultCount": 2,
                "resultPreviewCount": 2,
                "ttl": 600,
                "isDone": done
            }
        }]
    })
}

#[tokio::test]
async fn test_status_by_history_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1700000000.42"))
        .and(query_param("output_mode", "json"))
        .and(header("Authorization", format!("Splunk {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("1700000000.42", true, 1.0)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state_path = write_state(&dir, &server.uri(), &[("1700000000.42", "search earliest=-1h x")]);

    splunk_cmd_with_state(&state_path)
        .args(["status", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("1.00 2/2 [ttl = ")
                .and(predicate::str::ends_with("]\t1700000000.42 done\n")),
        );
}

#[tokio::test]
async fn test_status_unknown_when_progress_saturated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1700000000.44"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("1700000000.44", false, 1.0)))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state_path = write_state(&dir, &server.uri(), &[]);

    splunk_cmd_with_state(&state_path)
        .args(["status", "1700000000.44"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1700000000.44 unknown"));
}

#[tokio::test]
async fn test_status_raw_prints_body() {
    let server = MockServer::start().await;
    let body = r#"{"entry":[],"paging":{"total":0}}"#;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1700000000.42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state_path = write_state(&dir, &server.uri(), &[]);

    splunk_cmd_with_state(&state_path)
        .args(["status", "1700000000.42", "--raw"])
        .assert()
        .success()
        .stdout(predicate::eq(format!("{}\n", body)));
}

#[tokio::test]
async fn test_status_unknown_job_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1600000000.1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "messages": [{"type": "ERROR", "text": "Unknown sid."}]
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state_path = write_state(&dir, &server.uri(), &[]);

    splunk_cmd_with_state(&state_path)
        .args(["status", "1600000000.1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown sid."));
}

#[tokio::test]
async fn test_results_prints_augmented_and_plain_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1700000000.42/results"))
        .and(query_param("output_mode", "json"))
        .and(query_param("count", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"_raw": "{\"a\":1}", "host": "h1", "_time": "2020-01-01"},
                {"_raw": "plain text", "host": "h2", "_time": "2020-01-02"}
            ]
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state_path = write_state(&dir, &server.uri(), &[("1700000000.42", "search earliest=-1h x")]);

    let output = splunk_cmd_with_state(&state_path)
        .args(["results", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(
        first,
        serde_json::json!({"a": 1, "_host": "h1", "_time": "2020-01-01"})
    );
    assert_eq!(lines[1], "plain text");
}

#[tokio::test]
async fn test_results_count_and_raw() {
    let server = MockServer::start().await;
    let body = r#"{"results":[{"_raw":"x"}]}"#;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1700000000.42/results"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state_path = write_state(&dir, &server.uri(), &[]);

    splunk_cmd_with_state(&state_path)
        .args(["results", "1700000000.42", "-c", "1", "--raw"])
        .assert()
        .success()
        .stdout(predicate::eq(format!("{}\n", body)));
}

#[tokio::test]
async fn test_results_session_expired() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1700000000.42/results"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state_path = write_state(&dir, &server.uri(), &[]);

    splunk_cmd_with_state(&state_path)
        .args(["results", "1700000000.42"])
        .assert()
        .code(2);
}
