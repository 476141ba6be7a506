use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("shortpath-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn table_lists_reachable_and_unreachable_vertices() {
    let mut cmd = cli();
    cmd.args(["table", "--source", "B"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Distances from B (4 of 5 reachable):"))
        .stdout(predicate::str::contains("A  unreachable"))
        .stdout(predicate::str::is_match(r"E\s+6\s+via D").unwrap());
}

#[test]
fn table_json_uses_null_for_unreachable() {
    let mut cmd = cli();
    cmd.args(["--format", "json", "table", "--source", "C"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["source"], "C");
    assert_eq!(value["reachable"], 3);
    assert!(value["rows"][0]["distance"].is_null());
    assert!(value["rows"][0]["predecessor"].is_null());
    assert_eq!(value["rows"][2]["predecessor"], "C");
}

#[test]
fn table_rejects_unknown_source() {
    let mut cmd = cli();
    cmd.args(["table", "--source", "Nowhere"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown vertex 'Nowhere'."));
}
