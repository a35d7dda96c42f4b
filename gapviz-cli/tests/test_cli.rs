use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_CSV: &str = "\
country,year,fertility,life_expectancy,population
Chile,1980,2.67,69.2,11174000
Chile,1990,2.62,73.6,13274000
China,1980,2.32,66.8,981235000
China,1990,2.51,69.5,1135185000
";

#[test]
fn test_renders_svg_from_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("gapminder.csv");
    let output = dir.path().join("chart.svg");
    std::fs::write(&data, SAMPLE_CSV).unwrap();

    Command::cargo_bin("gapviz")
        .unwrap()
        .arg("--data")
        .arg(&data)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 2);
}

#[test]
fn test_spec_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("gapminder.csv");
    let spec = dir.path().join("spec.json");
    let output = dir.path().join("chart.svg");
    std::fs::write(&data, SAMPLE_CSV).unwrap();
    std::fs::write(&spec, r#"{"width": 1000.0}"#).unwrap();

    Command::cargo_bin("gapviz")
        .unwrap()
        .arg("--data")
        .arg(&data)
        .arg("--spec")
        .arg(&spec)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains(r#"width="1000""#));
}

#[test]
fn test_missing_dataset_fails() {
    Command::cargo_bin("gapviz")
        .unwrap()
        .args(["--data", "/no/such/file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open dataset"));
}

#[test]
fn test_invalid_spec_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("gapminder.csv");
    let spec = dir.path().join("spec.json");
    std::fs::write(&data, SAMPLE_CSV).unwrap();
    std::fs::write(&spec, r#"{"width": -5.0}"#).unwrap();

    Command::cargo_bin("gapviz")
        .unwrap()
        .arg("--data")
        .arg(&data)
        .arg("--spec")
        .arg(&spec)
        .assert()
        .failure()
        .stderr(predicate::str::contains("canvas dimensions must be positive"));
}
