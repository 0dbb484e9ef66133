//! Command line tests

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wirebind::cli::{Cli, Command, FormatArg, check, generate, list_diagnostics, load_config};
use wirebind::infrastructure::config::{AppConfig, ReportFormat};

/// One valid transient registration and one type with two unmarked constructors
const MODEL: &str = r"
types:
  - name: Test.IService
  - name: Test.Service
    constructors:
      - parameters: []
  - name: Test.IBroken
  - name: Test.Broken
    constructors:
      - parameters: []
      - parameters:
          - { name: name, type: System.String }
invocations:
  - method: Register
    type_arguments: [Test.IService, Test.Service]
    location: { file: Program.cs, line: 10, column: 9 }
    binding: { containing_type: Wirebind.Registrations }
  - method: Register
    type_arguments: [Test.IBroken, Test.Broken]
    location: { file: Program.cs, line: 11, column: 9 }
    binding: { containing_type: Wirebind.Registrations }
";

const CLEAN_MODEL: &str = r"
types:
  - name: Test.IService
  - name: Test.Service
    constructors: [{}]
invocations:
  - method: Register
    type_arguments: [Test.IService, Test.Service]
    location: { file: Program.cs, line: 10, column: 9 }
    binding: { containing_type: Wirebind.Registrations }
";

fn write_model(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("model.yaml");
    fs::write(&path, body).expect("write model");
    path
}

fn sequential_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.analysis.parallel = false;
    config
}

#[test]
fn test_parse_check_command() {
    let cli = Cli::try_parse_from([
        "wirebind",
        "--config",
        "custom.toml",
        "check",
        "model.yaml",
        "--format",
        "json",
        "--deny-warnings",
    ])
    .expect("arguments should parse");

    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    match cli.command {
        Command::Check {
            model,
            format,
            deny_warnings,
        } => {
            assert_eq!(model, PathBuf::from("model.yaml"));
            assert_eq!(format, Some(FormatArg::Json));
            assert!(deny_warnings);
        }
        other => panic!("Expected check command, got {other:?}"),
    }
    assert_eq!(ReportFormat::from(FormatArg::Json), ReportFormat::Json);
}

#[test]
fn test_parse_generate_command() {
    let cli = Cli::try_parse_from(["wirebind", "generate", "model.json", "-o", "Out.g.cs"])
        .expect("arguments should parse");
    match cli.command {
        Command::Generate { output, .. } => assert_eq!(output, Some(PathBuf::from("Out.g.cs"))),
        other => panic!("Expected generate command, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["wirebind", "check", "m.yaml", "--format", "xml"]).is_err());
}

#[test]
fn test_check_reports_failure() {
    let dir = TempDir::new().expect("temp dir");
    let model = write_model(&dir, MODEL);

    let mut out = Vec::new();
    let passed = check(&sequential_config(), &model, &mut out).expect("check should run");
    let text = String::from_utf8(out).expect("utf8 output");

    assert!(!passed);
    assert!(text.contains("Status: FAILED"));
    assert!(text.contains("[ERROR] D001 Program.cs:11:9:"));
}

#[test]
fn test_check_json_report() {
    let dir = TempDir::new().expect("temp dir");
    let model = write_model(&dir, MODEL);
    let mut config = sequential_config();
    config.report.format = ReportFormat::Json;

    let mut out = Vec::new();
    check(&config, &model, &mut out).expect("check should run");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON report");

    assert_eq!(value["summary"]["sites"], 2);
    assert_eq!(value["summary"]["valid"], 1);
    assert_eq!(value["summary"]["errors"], 1);
    assert_eq!(value["summary"]["passed"], false);
    assert_eq!(value["diagnostics"][0]["id"], "D001");
}

#[test]
fn test_check_passes_clean_model() {
    let dir = TempDir::new().expect("temp dir");
    let model = write_model(&dir, CLEAN_MODEL);

    let mut out = Vec::new();
    assert!(check(&sequential_config(), &model, &mut out).expect("check should run"));
}

#[test]
fn test_check_missing_model_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let mut out = Vec::new();
    let result = check(&sequential_config(), &dir.path().join("absent.yaml"), &mut out);
    assert!(result.is_err());
}

#[test]
fn test_generate_emits_valid_registrations_only() {
    let dir = TempDir::new().expect("temp dir");
    let model = write_model(&dir, MODEL);

    let mut code = Vec::new();
    let mut diagnostics = Vec::new();
    let passed = generate(&sequential_config(), &model, &mut code, &mut diagnostics)
        .expect("generate should run");
    let code = String::from_utf8(code).expect("utf8 code");
    let diagnostics = String::from_utf8(diagnostics).expect("utf8 diagnostics");

    assert!(!passed);
    assert!(code.contains("new global::Test.Service()"));
    assert!(code.contains("typeof(global::Test.IService)"));
    assert!(!code.contains("Test.Broken"));
    assert!(diagnostics.starts_with("Program.cs:11:9: error D001:"));
}

#[test]
fn test_generate_uses_emit_options() {
    let dir = TempDir::new().expect("temp dir");
    let model = write_model(&dir, CLEAN_MODEL);
    let mut config = sequential_config();
    config.emit.namespace = "Acme.Wiring".to_string();

    let mut code = Vec::new();
    let mut diagnostics = Vec::new();
    let passed =
        generate(&config, &model, &mut code, &mut diagnostics).expect("generate should run");

    assert!(passed);
    assert!(diagnostics.is_empty());
    assert!(String::from_utf8_lossy(&code).contains("namespace Acme.Wiring"));
}

#[test]
fn test_list_diagnostics() {
    let mut out = Vec::new();
    list_diagnostics(&mut out).expect("catalog should print");
    let text = String::from_utf8(out).expect("utf8 output");

    let ids: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, ["D001", "D002", "D003", "D004", "D005", "D006", "D007"]);
    assert!(text.contains("D006  WARNING"));
}

#[test]
fn test_load_config_reports_its_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wirebind.toml");
    fs::write(&path, "[report]\nformat = \"json\"\n").unwrap();

    let (config, source) = load_config(Some(&path)).unwrap();
    assert_eq!(config.report.format, ReportFormat::Json);
    assert_eq!(source, Some(path));
}
