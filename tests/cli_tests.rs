use assert_cmd::Command;
use predicates::prelude::*;

fn perfrun() -> Command {
    Command::new(env!("CARGO_BIN_EXE_perfrun"))
}

#[test]
fn test_cli_exits_with_success_on_help() {
    perfrun().arg("--help").assert().success();
}

#[test]
fn test_cli_prints_description_and_summary() {
    perfrun()
        .args(["--tests", "3", "--size", "100"])
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TESTS: 3"))
        .stdout(predicate::str::contains("Using 1 core"))
        .stdout(predicate::str::contains("Finished 3 tests."))
        .stdout(predicate::str::contains("1: ").not());
}

#[test]
fn test_cli_lists_runs_when_answered_one() {
    let output = perfrun()
        .args(["-n", "5", "--size", "100"])
        .write_stdin("1\n")
        .output()
        .expect("run perfrun");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for idx in 1..=5 {
        assert!(stdout.contains(&format!("\n{idx}: ")), "missing run {idx}");
    }
    assert!(!stdout.contains("\n6: "));
}

#[test]
fn test_cli_rejects_zero_tests() {
    perfrun()
        .args(["--tests", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_cli_rejects_negative_interval() {
    perfrun().args(["--interval", "-1"]).assert().failure();
}

#[test]
fn test_cli_json_output() {
    let output = perfrun()
        .args(["--tests", "2", "--workload", "sort", "--size", "64", "--json"])
        .output()
        .expect("run perfrun");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 2);
}

#[test]
fn test_cli_gate_failure_exits_nonzero() {
    perfrun()
        .args([
            "--tests",
            "2",
            "--workload",
            "sleep",
            "--size",
            "20",
            "--details",
            "never",
            "--max-average",
            "0.001",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gate:"));
}

#[test]
fn test_cli_rejects_invalid_gate_threshold_before_running() {
    for bad in ["NaN", "inf", "-0.5"] {
        perfrun()
            .args(["--tests", "1", "--details", "never"])
            .arg(format!("--max-average={bad}"))
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("threshold"));
    }
}

#[test]
fn test_cli_json_conflicts_with_details() {
    perfrun()
        .args(["--json", "--details", "always"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_cli_gate_pass_exits_zero() {
    perfrun()
        .args([
            "--tests",
            "2",
            "--size",
            "10",
            "--details",
            "never",
            "--max-average",
            "60",
            "--max-single",
            "60",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("gate:").not());
}
