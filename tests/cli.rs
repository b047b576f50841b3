//! Integration tests for the saascost CLI
//!
//! Every calculation runs with `--offline` or manual rates, so no network is
//! touched.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn saascost(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("saascost").unwrap();
    cmd.env("SAAS_COST_DATA_DIR", data_dir.path())
        .env_remove("SAAS_COST_ACCESS_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SaaS cost calculator"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_calc_default_usage() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir)
        .args(["calc", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User Costs"))
        .stdout(predicate::str::contains("$50.00"))
        .stdout(predicate::str::contains("Revenue Share"))
        .stdout(predicate::str::contains("Total: $270.00"))
        .stdout(predicate::str::contains("Monthly Cost Trend"));
}

#[test]
fn test_calc_yearly_with_service() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir)
        .args([
            "calc",
            "--offline",
            "--cycle",
            "yearly",
            "--service",
            "Analytics:20:0.01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$600.00"))
        .stdout(predicate::str::contains("Analytics"))
        .stdout(predicate::str::contains("$360.00"));
}

#[test]
fn test_calc_with_manual_rates() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir)
        .args([
            "calc",
            "--currency",
            "EUR",
            "--rate",
            "USD=1",
            "--rate",
            "EUR=0.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("€25.00"))
        .stdout(predicate::str::contains("Warning").not());
}

#[test]
fn test_calc_offline_foreign_currency_warns() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir)
        .args(["calc", "--offline", "--currency", "INR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹50.00"))
        .stdout(predicate::str::contains("Warning"));
}

#[test]
fn test_calc_json() {
    let data_dir = TempDir::new().unwrap();
    let output = saascost(&data_dir)
        .args(["calc", "--offline", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 5);
    assert_eq!(json["rows"][0]["service"], "User Costs");
    assert_eq!(json["rows"][0]["cost"], "$50.00");
    assert_eq!(json["monthly_trend"].as_array().unwrap().len(), 12);
    assert!((json["total"].as_f64().unwrap() - 270.0).abs() < 1e-9);
}

#[test]
fn test_calc_invalid_currency() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir)
        .args(["calc", "--offline", "--currency", "XYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported currency"));
}

#[test]
fn test_calc_negative_storage() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir)
        .args(["calc", "--offline", "--storage=-1"])
        .assert()
        .failure();
}

#[test]
fn test_calc_too_many_services() {
    let data_dir = TempDir::new().unwrap();
    let mut cmd = saascost(&data_dir);
    cmd.args(["calc", "--offline"]);
    for i in 0..11 {
        cmd.arg("--service").arg(format!("S{}:1:0", i));
    }
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("10"));
}

#[test]
fn test_export_csv() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("report.csv");

    saascost(&data_dir)
        .args(["export", "csv"])
        .arg(&output)
        .arg("--offline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 line items"));

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Service,Cost");
    assert_eq!(lines[5], "Revenue Share,$100.00");
}

#[test]
fn test_export_pdf() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("report.pdf");

    saascost(&data_dir)
        .args(["export", "pdf"])
        .arg(&output)
        .args(["--offline", "--currency", "EUR"])
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(String::from_utf8_lossy(&bytes).trim_end().ends_with("%%EOF"));
}

#[test]
fn test_rates_with_overrides() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir)
        .args(["rates", "--rate", "USD=1", "--rate", "EUR=0.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR"))
        .stdout(predicate::str::contains("0.900000"));
}

#[test]
fn test_init_and_config() {
    let data_dir = TempDir::new().unwrap();
    saascost(&data_dir).arg("init").assert().success();
    assert!(data_dir.path().join("config.json").exists());

    saascost(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default currency: USD"))
        .stdout(predicate::str::contains("Initialized:       true"));
}

#[test]
fn test_settings_default_currency() {
    let data_dir = TempDir::new().unwrap();
    fs::write(
        data_dir.path().join("config.json"),
        r#"{"default_currency": "GBP", "default_cycle": "yearly"}"#,
    )
    .unwrap();

    saascost(&data_dir)
        .args(["calc", "--rate", "USD=1", "--rate", "GBP=0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("£300.00"));
}
