use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PORK_TEXT: &str = "\
USDA Pork Cuts Report
Item                         Pounds      Price Range       Wtd Avg
Loin
1/4 Trimmed Loin VAC    171,141    92.50 - 109.90    97.72
Belly
Skin-on Belly 11-13#    80,400    130.00 - 145.00    138.10
";

const BRANDED_TEXT: &str = "\
Upper 2/3 Choice Items Cuts
109E 1 Rib, ribeye, lip-on, bn-in 55 119,191 1,266.00 - 1,616.00 1,359.01
Lower 1/3 Choice Items Cuts
116A 3 Chuck, chuck roll 18 40,500 610.00 - 702.50 655.12
";

fn mpr(dir: &Path) -> Command {
    let config = dir.join("config.json");
    if !config.exists() {
        fs::write(&config, "{}").unwrap();
    }
    let mut cmd = Command::cargo_bin("mpr").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn parse_text_report_to_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pork.txt");
    fs::write(&input, PORK_TEXT).unwrap();

    let output = mpr(dir.path())
        .args(["parse", "--report-type", "pork_cuts", "--report-date", "2024-03-11"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["report_type"], "pork_cuts");
    assert_eq!(json["report_date"], "2024-03-11");

    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["product_name"], "Loin - 1/4 Trimmed Loin VAC");
    assert_eq!(records[0]["meat_type"], "pork");
    assert_eq!(records[1]["category"], "Belly");
}

#[test]
fn parse_to_csv_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("branded.txt");
    let output = dir.path().join("out.csv");
    fs::write(&input, BRANDED_TEXT).unwrap();

    mpr(dir.path())
        .args(["parse", "-t", "branded_beef", "--format", "csv", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("product_name,product_code,category"));
    assert!(lines[1].contains("109E"));
    assert!(lines[1].contains("Upper 2/3 Choice"));
    assert!(!csv.contains("116A"));
}

#[test]
fn unknown_report_type_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pork.txt");
    fs::write(&input, PORK_TEXT).unwrap();

    mpr(dir.path())
        .args(["parse", "-t", "lamb_cuts"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown report type"));
}

#[test]
fn empty_input_is_an_extraction_failure() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();

    mpr(dir.path())
        .args(["parse", "-t", "pork_cuts"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("extraction error"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    let outputs = dir.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("week1.txt"), PORK_TEXT).unwrap();
    fs::write(inputs.join("week2.txt"), PORK_TEXT).unwrap();
    fs::write(inputs.join("broken.txt"), "").unwrap();

    let pattern = format!("{}/*.txt", inputs.display());
    mpr(dir.path())
        .args(["batch", "-t", "pork_cuts", "-j", "2", "--continue-on-error", "--summary"])
        .arg("--output-dir")
        .arg(&outputs)
        .arg(&pattern)
        .assert()
        .success()
        .stderr(predicate::str::contains("2 ok, 1 failed"));

    assert!(outputs.join("week1.json").exists());
    assert!(outputs.join("week2.json").exists());

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 4);
    assert!(summary.contains("broken.txt,error"));
}

#[test]
fn reports_lists_catalog() {
    let dir = TempDir::new().unwrap();
    mpr(dir.path())
        .arg("reports")
        .assert()
        .success()
        .stdout(predicate::str::contains("daily_afternoon"))
        .stdout(predicate::str::contains("pork_cuts"));
}

#[test]
fn config_set_writes_the_explicit_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    mpr(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .args(["config", "set", "parser.pork_zero_values", "accept"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config).unwrap()).unwrap();
    assert_eq!(saved["parser"]["pork_zero_values"], "accept");
    assert!(!dir.path().join("xdg").join("mpr").join("config.json").exists());

    mpr(dir.path())
        .args(["config", "get", "parser.pork_zero_values"])
        .assert()
        .success()
        .stdout(predicate::str::contains("accept"));
}
