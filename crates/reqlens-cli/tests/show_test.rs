mod fixtures;

use assert_cmd::Command;
use predicates::prelude::*;

fn reqlens() -> Command {
    Command::cargo_bin("reqlens").unwrap()
}

#[test]
fn show_plain_renders_five_summary_fields_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_capture(dir.path(), "a.json", &fixtures::openai_success());

    let assert = reqlens()
        .args(["show", path.to_str().unwrap(), "--format", "plain"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let positions: Vec<_> = ["Model:", "Tokens:", "Cost:", "Status:", "Latency:"]
        .iter()
        .map(|title| output.find(title).unwrap_or_else(|| panic!("missing {title}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "fields out of order");

    assert!(output.contains("gpt-4"));
    assert!(output.contains("21 (prompt: 9, completion: 12)"));
    assert!(output.contains("$0.0031"));
    assert!(output.contains("Success"));
    assert!(output.contains("834ms"));
}

#[test]
fn show_plain_failure_renders_status_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_capture(dir.path(), "a.json", &fixtures::openai_failure());

    reqlens()
        .args(["show", path.to_str().unwrap(), "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("500 Error"))
        .stdout(predicate::str::contains("(prompt: -, completion: -)"));
}

#[test]
fn show_out_of_range_status_renders_failure_badge() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = fixtures::openai_failure();
    record["response"]["status"] = serde_json::json!(-1);
    let path = fixtures::write_capture(dir.path(), "a.json", &record);

    reqlens()
        .args(["show", path.to_str().unwrap(), "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-1 Error"));
}

#[test]
fn show_unmatched_provider_renders_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_capture(dir.path(), "a.json", &fixtures::anthropic_record());

    reqlens()
        .args(["show", path.to_str().unwrap(), "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn show_json_emits_view_model_with_initial_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_capture(dir.path(), "a.json", &fixtures::openai_failure());

    let assert = reqlens()
        .args(["show", path.to_str().unwrap(), "--format", "json"])
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["initial_mode"], "json");
    assert_eq!(parsed["success"], false);
    assert_eq!(parsed["summary"].as_array().unwrap().len(), 5);
}

#[test]
fn show_missing_file_fails_with_context() {
    reqlens()
        .args(["show", "/nonexistent/capture.json", "--format", "plain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load capture file"));
}
