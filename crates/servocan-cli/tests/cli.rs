use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("servocan"))
}

#[test]
fn encode_write_emits_documented_frame() {
    let assert = cmd()
        .args(["encode", "write", "1", "0x0A", "0x1234"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let frame: Value = serde_json::from_str(stdout.trim()).expect("valid json");
    assert_eq!(frame["arbitration_id"], 2);
    assert_eq!(
        frame["payload"],
        serde_json::json!([0x77, 0x01, 0x0A, 0x34, 0x12])
    );
}

#[test]
fn encode_extended_selects_arbitration_id_zero() {
    let assert = cmd()
        .args(["encode", "--extended", "read", "1", "0x32"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let frame: Value = serde_json::from_str(stdout.trim()).expect("valid json");
    assert_eq!(frame["arbitration_id"], 0);
}

#[test]
fn encode_hex_output_includes_description() {
    cmd()
        .args(["encode", "--hex", "write", "1", "0x0A", "0x1234"])
        .assert()
        .success()
        .stdout(contains("77 01 0A 34 12").and(contains("Write Single Register")));
}

#[test]
fn encode_set_can_id_prints_complete_sequence() {
    let assert = cmd()
        .args(["encode", "set-can-id", "1", "0x0105"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let frames: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid json"))
        .collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["payload"][2], 0x3E);
    assert_eq!(frames[1]["payload"][2], 0x3C);
}

#[test]
fn encode_legacy_write_matches_checksum_vector() {
    let assert = cmd()
        .args(["encode", "legacy-write", "5", "0x06", "1"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let frame: Value = serde_json::from_str(stdout.trim()).expect("valid json");
    assert_eq!(frame["arbitration_id"], 0);
    assert_eq!(frame["payload"], serde_json::json!([0, 0, 5, 2, 1, 0, 12, 0]));
}

#[test]
fn encode_rejects_odd_address_without_force() {
    cmd()
        .args(["encode", "write", "1", "0x0D", "100"])
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("must be even")).and(contains("--force")));
}

#[test]
fn encode_force_bypasses_validation() {
    cmd()
        .args(["encode", "--force", "write", "1", "0x0D", "100"])
        .assert()
        .success();
}

#[test]
fn decode_single_response_resolves_register_name() {
    let assert = cmd()
        .args(["decode", "--json", "00 76 01 0C DC 05"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let parsed: Value = serde_json::from_str(stdout.trim()).expect("valid json");
    assert_eq!(parsed["type"], "single_response");
    assert_eq!(parsed["servo_id"], 1);
    assert_eq!(parsed["register_name"], "POSITION_NEW");
    assert_eq!(parsed["value"], 1500);
}

#[test]
fn decode_human_readable_summary() {
    cmd()
        .args(["decode", "00 76 01 0C DC 05"])
        .assert()
        .success()
        .stdout(contains("POSITION_NEW").and(contains("1500 us")));
}

#[test]
fn decode_short_payload_shows_error_and_hint() {
    cmd()
        .args(["decode", "00 76"])
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn decode_invalid_hex_shows_error_and_hint() {
    cmd()
        .args(["decode", "zz"])
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn registers_lists_catalog() {
    cmd()
        .args(["registers"])
        .assert()
        .success()
        .stdout(contains("SERVO_ID").and(contains("SAVE_RESET")));
}

#[test]
fn registers_json_is_valid() {
    let assert = cmd().args(["registers", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let defs: Vec<Value> = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(defs.len(), 8);
    assert!(defs.iter().any(|def| def["name"] == "CAN_ID_LOW"));
}
