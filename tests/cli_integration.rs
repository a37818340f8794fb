use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn forecourt() -> Command {
    Command::cargo_bin("forecourt").unwrap()
}

fn write_inputs(dir: &TempDir) {
    fs::write(
        dir.path().join("current.json"),
        indoc! {r#"
            {
              "fuel_volume": 1000,
              "fuel_revenue": 20000,
              "fuel_cost": 19700,
              "shop_revenue": 1500,
              "labor_cost": 1200,
              "target_volume": 1200,
              "fuels": [
                {"grade": "petrol95", "volume": 600, "revenue": 12000, "cost": 11800},
                {"grade": "diesel_ex", "volume": 400, "revenue": 8000, "cost": 7900}
              ]
            }
        "#},
    )
    .unwrap();
    fs::write(
        dir.path().join("history.json"),
        "[900, 950, 1000, 1050, 1100, 1150, 1200, 1250]",
    )
    .unwrap();
}

#[test]
fn test_analyze_writes_json_report() {
    let dir = TempDir::new().unwrap();
    write_inputs(&dir);

    let output = forecourt()
        .current_dir(dir.path())
        .env_remove("FORECOURT_CONFIG")
        .args([
            "analyze",
            "--current",
            "current.json",
            "--history",
            "history.json",
            "--horizon",
            "3",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["alerts"][0]["rule"], "low_fuel_efficiency");
    assert_eq!(report["alerts"][0]["severity"], "high");
    assert_eq!(
        report["forecasts"]["linear_regression"]["forecast"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
    assert_eq!(report["metrics"]["fuel_mix"][1]["grade"], "diesel_ex");
}

#[test]
fn test_analyze_terminal_output() {
    let dir = TempDir::new().unwrap();
    write_inputs(&dir);

    let output = forecourt()
        .current_dir(dir.path())
        .env_remove("FORECOURT_CONFIG")
        .env("NO_COLOR", "1")
        .args(["analyze", "--current", "current.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FORECOURT PERFORMANCE REPORT"));
    assert!(stdout.contains("Margin per liter"));
    assert!(stdout.contains("insufficient data"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    forecourt()
        .current_dir(dir.path())
        .args(["analyze", "--current", "nope.json"])
        .assert()
        .failure();
}

#[test]
fn test_init_then_refuse_overwrite() {
    let dir = TempDir::new().unwrap();

    forecourt()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    let written = fs::read_to_string(dir.path().join("forecourt.toml")).unwrap();
    assert!(written.contains("[benchmarks.fuel_efficiency]"));

    forecourt()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();
    forecourt()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
