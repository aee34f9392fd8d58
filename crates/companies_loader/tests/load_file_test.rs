//! File-based loading tests.

use companies_loader::{load_file, LoaderError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "companies.json",
        r#"[{"name": "Acme"}, {"name": "Globex"}, {"name": "Initech"}]"#,
    );

    let collection = load_file(&path).expect("Failed to load JSON file");

    let names: Vec<_> = collection
        .records()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Acme", "Globex", "Initech"]);
}

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "companies.yaml", "- name: Acme\n- name: Globex\n");

    let collection = load_file(&path).expect("Failed to load YAML file");
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = load_file(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(LoaderError::IoError(_))));
}

#[test]
fn test_truncated_json_fails_whole_load() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "companies.json", r#"[{"name": "Acme"}, {"name": "#);

    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("Invalid JSON format"), "{err}");
}

#[test]
fn test_unsupported_extension_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let result = load_file(&dir.path().join("companies.csv"));
    assert!(matches!(result, Err(LoaderError::UnsupportedFormat(_))));
}
