use assert_cmd::Command;
use predicates::prelude::*;

fn example_check() -> Command {
    let mut cmd = Command::cargo_bin("example-check").expect("Failed to find example-check binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn builtin_suites_pass() {
    example_check()
        .assert()
        .code(0)
        .stdout(predicate::str::contains("PASS: Providers/code_is_stable"))
        .stdout(predicate::str::contains("PASS: Output/line_shape"))
        .stdout(predicate::str::contains("6 cases, 0 failed"))
        .stdout(predicate::str::contains("FAIL").not());
}

#[test]
fn suite_filter_runs_only_that_suite() {
    example_check()
        .args(["--suite", "Output"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Providers").not())
        .stdout(predicate::str::contains("2 cases, 0 failed"));
}

#[test]
fn unknown_suite_is_an_error() {
    example_check()
        .args(["--suite", "Nope"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Unknown suite 'Nope'"));
}

#[test]
fn json_report_is_parseable() {
    let output = example_check().args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let suites = report["suites"].as_array().unwrap();
    assert_eq!(suites.len(), 2);
    assert_eq!(suites[0]["suite"], "Providers");
    assert!(suites
        .iter()
        .flat_map(|s| s["outcomes"].as_array().unwrap())
        .all(|o| o["passed"] == true));
}
