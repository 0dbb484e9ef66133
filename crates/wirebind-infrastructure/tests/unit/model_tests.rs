//! Model document loading tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wirebind_domain::error::Error;
use wirebind_infrastructure::model::{ModelFormat, load_model, read_model_document};

const YAML_MODEL: &str = r"
types:
  - name: Test.IService
  - name: Test.Service
    constructors:
      - accessibility: public
invocations:
  - method: Register
    type_arguments: [Test.IService, Test.Service]
    location: { file: Program.cs, line: 12, column: 9 }
    binding: { containing_type: Wirebind.Registrations }
";

const JSON_MODEL: &str = r#"{
  "types": [{ "name": "Test.IService" }, { "name": "Test.Service" }],
  "invocations": [
    {
      "method": "Register",
      "type_arguments": ["Test.IService", "Test.Service"],
      "location": { "file": "Program.cs", "line": 3, "column": 1 }
    }
  ]
}"#;

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write model");
    path
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ModelFormat::from_path(Path::new("model.json")).ok(),
        Some(ModelFormat::Json)
    );
    assert_eq!(
        ModelFormat::from_path(Path::new("model.YAML")).ok(),
        Some(ModelFormat::Yaml)
    );
    assert_eq!(
        ModelFormat::from_path(Path::new("dir/model.yml")).ok(),
        Some(ModelFormat::Yaml)
    );
    assert!(matches!(
        ModelFormat::from_path(Path::new("model.txt")),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(ModelFormat::from_path(Path::new("model")).is_err());
}

#[test]
fn test_load_yaml_model() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "model.yaml", YAML_MODEL);

    let loaded = load_model(&path).expect("model should load");

    assert_eq!(loaded.sites.len(), 1);
    let site = &loaded.sites[0];
    assert_eq!(site.method_name, "Register");
    assert_eq!(site.location.line, 12);
    assert_eq!(site.type_arguments.len(), 2);
    assert!(loaded.model.type_ref("Test.Service").is_some());
}

#[test]
fn test_load_json_model() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "model.json", JSON_MODEL);

    let document = read_model_document(&path).expect("document should parse");
    assert_eq!(document.types.len(), 2);

    let loaded = load_model(&path).expect("model should load");
    assert_eq!(loaded.sites[0].location.column, 1);
    assert!(loaded.sites[0].binding.is_none());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let result = load_model(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_wrong_syntax_for_extension_is_model_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "model.json", YAML_MODEL);
    assert!(matches!(load_model(&path), Err(Error::Model { .. })));
}

#[test]
fn test_invalid_model_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "model.yaml",
        "types:\n  - name: Test.A\n    base: Test.Missing\n",
    );
    assert!(matches!(load_model(&path), Err(Error::Model { .. })));
}
