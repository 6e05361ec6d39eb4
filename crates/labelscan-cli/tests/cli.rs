use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn labelscan() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("labelscan"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn write_model(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}

fn stdout_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout).lines().map(str::to_string).collect()
}

#[test]
fn no_arguments_scans_default_model_path() {
    let temp = tempdir().unwrap();
    let mut bytes = vec![0u8; 10];
    bytes.extend_from_slice(b"CheeseBurger\x00");
    write_model(&temp.path().join("assets/models/food_classifier.tflite"), &bytes);

    let assert = labelscan().current_dir(temp.path()).assert().success();
    let lines = stdout_lines(&assert.get_output().stdout);

    assert_eq!(lines, vec!["model size: 23 bytes", "      10: CheeseBurger"]);
}

#[test]
fn offsets_are_first_occurrence_only() {
    let temp = tempdir().unwrap();
    let model = temp.path().join("m.tflite");
    write_model(&model, b"\x00\x00Pizzaz\x00\x00\x00Pizzaz\x00club sandwich\x00");

    let assert = labelscan().arg("--model").arg(&model).assert().success();
    let lines = stdout_lines(&assert.get_output().stdout);
    let trimmed: Vec<&str> = lines.iter().map(|l| l.trim()).collect();

    assert_eq!(trimmed, vec!["model size: 32 bytes", "2: Pizzaz", "18: club sandwich"]);
}

#[test]
fn non_label_bytes_print_only_size() {
    let temp = tempdir().unwrap();
    let model = temp.path().join("m.tflite");
    write_model(&model, &[0x00, 0x01, 0x20, 0x2d, 0x30, 0xff, 0x7f]);

    labelscan()
        .arg("--model")
        .arg(&model)
        .assert()
        .success()
        .stdout("model size: 7 bytes\n");
}

#[test]
fn empty_model_reports_zero_bytes() {
    let temp = tempdir().unwrap();
    let model = temp.path().join("empty.tflite");
    write_model(&model, b"");

    labelscan()
        .arg("--model")
        .arg(&model)
        .assert()
        .success()
        .stdout("model size: 0 bytes\n");
}

#[test]
fn output_is_stable_across_runs() {
    let temp = tempdir().unwrap();
    let model = temp.path().join("m.tflite");
    write_model(&model, b"\x10Glazed Donut\x11Chicken Nuggets\x12seafood\x13");

    let first = labelscan().arg("--model").arg(&model).assert().success().get_output().stdout.clone();
    let second = labelscan().arg("--model").arg(&model).assert().success().get_output().stdout.clone();

    assert_eq!(first, second);
}

#[test]
fn missing_model_fails_with_diagnostic() {
    let temp = tempdir().unwrap();

    labelscan()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("food_classifier.tflite"));
}

#[test]
fn json_format_emits_report_object() {
    let temp = tempdir().unwrap();
    let model = temp.path().join("m.tflite");
    write_model(&model, b"\x00Pepperoni Pizza\x00");

    let assert = labelscan().arg("--model").arg(&model).arg("--format").arg("json").assert().success();
    let v: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(v["model_size"], 17);
    assert_eq!(v["matches"].as_array().unwrap().len(), 1);
    assert_eq!(v["matches"][0]["offset"], 1);
    assert_eq!(v["matches"][0]["text"], "Pepperoni Pizza");
}

#[test]
fn invalid_rules_file_is_rejected() {
    let temp = tempdir().unwrap();
    let model = temp.path().join("m.tflite");
    let rules = temp.path().join("rules.toml");
    write_model(&model, b"\x00Pizza\x00");
    fs::write(&rules, "min_len = 0\n").unwrap();

    labelscan()
        .arg("--model")
        .arg(&model)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_len"));
}
