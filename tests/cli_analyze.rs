use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn meshlint() -> Command {
    Command::cargo_bin("meshlint").unwrap()
}

#[test]
fn analyze_hardened_config_reports_clean() {
    meshlint()
        .args(["analyze", "tests/fixtures/hardened.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No security findings"));
}

#[test]
fn analyze_permissive_config_lists_findings() {
    meshlint()
        .args(["analyze", "tests/fixtures/permissive.yaml", "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rbac.mode: [Critical] RBAC"))
        .stdout(predicate::str::contains("1 critical"));
}

#[test]
fn analyze_json_format_emits_findings_and_summary() {
    let output = meshlint()
        .args(["analyze", "tests/fixtures/permissive.yaml", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["summary"]["total"], 13);
    assert_eq!(value["summary"]["critical"], 1);
    assert!(value["findings"].as_array().unwrap().len() == 13);
}

#[test]
fn analyze_json_input_file() {
    meshlint()
        .args(["analyze", "tests/fixtures/hardened.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No security findings"));
}

#[test]
fn analyze_severity_threshold_drops_lower_findings() {
    meshlint()
        .args([
            "analyze",
            "tests/fixtures/permissive.yaml",
            "--format",
            "plain",
            "--severity",
            "high",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 medium, 0 low"));
}

#[test]
fn analyze_fail_on_findings_uses_severity_exit_codes() {
    // Critical findings exit 1.
    meshlint()
        .args([
            "analyze",
            "tests/fixtures/permissive.yaml",
            "--fail-on-findings",
        ])
        .assert()
        .code(1);

    // A clean config exits 0 even with the flag set.
    meshlint()
        .args([
            "analyze",
            "tests/fixtures/hardened.yaml",
            "--fail-on-findings",
        ])
        .assert()
        .success();
}

#[test]
fn analyze_fail_on_findings_exit_code_for_medium() {
    // Filter down to a config whose worst finding is Medium: hardened
    // except for an unset trust domain.
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    let content = std::fs::read_to_string("tests/fixtures/hardened.yaml")
        .unwrap()
        .replace("trustDomain: prod.example.com\n", "");
    file.write_all(content.as_bytes()).unwrap();

    meshlint()
        .args(["analyze"])
        .arg(file.path())
        .arg("--fail-on-findings")
        .assert()
        .code(3);
}

#[test]
fn analyze_writes_report_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");

    meshlint()
        .args(["analyze", "tests/fixtures/minimal.yaml", "--format", "json"])
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported to"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["summary"]["total"], 12);
}

#[test]
fn analyze_unparseable_yaml_is_an_error() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(b"kind: [unclosed").unwrap();

    meshlint()
        .args(["analyze"])
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn analyze_missing_file_is_an_error() {
    meshlint()
        .args(["analyze", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn checks_lists_the_catalogue() {
    meshlint()
        .args(["checks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mesh-mtls"))
        .stdout(predicate::str::contains("outbound-traffic-policy"))
        .stdout(predicate::str::contains("10 checks"));
}

#[test]
fn checks_detailed_shows_descriptions() {
    meshlint()
        .args(["checks", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STRICT mode"));
}
