//! Loader for company collections (JSON/YAML formats).
//!
//! Reads a collection from storage into the in-memory [`Collection`] shape the
//! validator expects. The document root must be a list and every element must
//! be an object; anything else fails the whole load. A partially parsed
//! collection is never returned.
//!
//! # Example
//!
//! ```rust
//! use companies_loader::parse_json;
//!
//! let json = r#"[
//!     {"name": "Acme", "careers_url": "https://acme.example/jobs"},
//!     {"name": "Globex"}
//! ]"#;
//!
//! let collection = parse_json(json).expect("Failed to parse collection");
//! assert_eq!(collection.len(), 2);
//! ```

use companies_core::{json_type_name, Collection};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a collection.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// JSON parsing failed
    #[error("Invalid JSON format: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing failed
    #[error("Invalid YAML format: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document root is not a list
    #[error("Expected a list of company records at the document root, found {found}")]
    NotAnArray {
        /// JSON type found at the root
        found: &'static str,
    },

    /// A collection element is not an object
    #[error("Record at index {index} must be an object, found {found}")]
    RecordNotObject {
        /// Position of the offending element
        index: usize,
        /// JSON type of the element
        found: &'static str,
    },

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Supported collection file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
}

/// Parse a collection from a JSON string.
///
/// # Errors
///
/// Fails on malformed JSON, a non-list root, or any non-object element.
pub fn parse_json(content: &str) -> Result<Collection> {
    let document: Value = serde_json::from_str(content)?;
    into_collection(document)
}

/// Parse a collection from a YAML string.
///
/// The document must be a sequence of mappings with string keys.
///
/// # Example
///
/// ```rust
/// use companies_loader::parse_yaml;
///
/// let yaml = r#"
/// - name: Acme
///   careers_url: https://acme.example/jobs
///   last_updated: 2024-01-15
/// "#;
///
/// let collection = parse_yaml(yaml).unwrap();
/// assert_eq!(collection.get(0).unwrap()["last_updated"], "2024-01-15");
/// ```
pub fn parse_yaml(content: &str) -> Result<Collection> {
    let document: Value = serde_yaml_ng::from_str(content)?;
    into_collection(document)
}

/// Detect the collection format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `CollectionFormat::Json`
/// * `.yaml`, `.yml` → `CollectionFormat::Yaml`
///
/// # Errors
///
/// Returns `LoaderError::InvalidExtension` if the file has no extension.
/// Returns `LoaderError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<CollectionFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(LoaderError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(CollectionFormat::Json),
        "yaml" | "yml" => Ok(CollectionFormat::Yaml),
        other => Err(LoaderError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a collection from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use companies_loader::load_file;
/// use std::path::Path;
///
/// let collection = load_file(Path::new("data/companies.json")).unwrap();
/// println!("Loaded {} companies", collection.len());
/// ```
pub fn load_file(path: &Path) -> Result<Collection> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, bytes = content.len(), "read collection file");

    match format {
        CollectionFormat::Json => parse_json(&content),
        CollectionFormat::Yaml => parse_yaml(&content),
    }
}

fn into_collection(document: Value) -> Result<Collection> {
    let elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(LoaderError::NotAnArray {
                found: json_type_name(&other),
            });
        }
    };

    let mut collection = Collection::new();
    for (index, element) in elements.into_iter().enumerate() {
        match element {
            Value::Object(record) => collection.push(record),
            other => {
                return Err(LoaderError::RecordNotObject {
                    index,
                    found: json_type_name(&other),
                });
            }
        }
    }

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_json_keeps_order_and_shape() {
        let json = r#"[
            {"name": "Acme", "tech_stack": ["Rust"]},
            {"name": 7, "locations": {"city": "Rome"}}
        ]"#;

        let collection = parse_json(json).expect("Failed to parse JSON collection");

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(0).unwrap()["tech_stack"], json!(["Rust"]));
        // Wrong types are preserved for the validator to report.
        assert_eq!(collection.get(1).unwrap()["name"], json!(7));
    }

    #[test]
    fn test_parse_json_keeps_field_order() {
        let collection = parse_json(r#"[{"z": 1, "a": 2, "m": 3}]"#).unwrap();
        let keys: Vec<&str> = collection.get(0).unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let collection = parse_json("[]").unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_json(r#"[{"name": "Acme",}]"#);
        assert!(matches!(result, Err(LoaderError::JsonError(_))));
    }

    #[test]
    fn test_root_not_a_list() {
        let result = parse_json(r#"{"companies": []}"#);
        match result {
            Err(LoaderError::NotAnArray { found }) => assert_eq!(found, "object"),
            other => panic!("Expected NotAnArray, got {:?}", other),
        }
    }

    #[test]
    fn test_element_not_an_object() {
        let result = parse_json(r#"[{"name": "Acme"}, "Globex"]"#);
        match result {
            Err(err @ LoaderError::RecordNotObject { .. }) => {
                assert_eq!(
                    err.to_string(),
                    "Record at index 1 must be an object, found string"
                );
            }
            other => panic!("Expected RecordNotObject, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
- name: Acme
  careers_url: https://acme.example/jobs
  locations:
    - country: Germany
      city: Berlin
      is_hq: true
  tech_stack: [Rust, Go]
  last_updated: 2024-01-15
"#;

        let collection = parse_yaml(yaml).expect("Failed to parse YAML collection");
        let record = collection.get(0).unwrap();

        assert_eq!(record["locations"][0]["is_hq"], json!(true));
        assert_eq!(record["tech_stack"], json!(["Rust", "Go"]));
        assert_eq!(record["last_updated"], json!("2024-01-15"));
    }

    #[test]
    fn test_yaml_root_not_a_list() {
        let result = parse_yaml("name: Acme\n");
        assert!(matches!(result, Err(LoaderError::NotAnArray { found: "object" })));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("data/companies.json")).unwrap(),
            CollectionFormat::Json
        );
        assert_eq!(
            detect_format(Path::new("companies.YML")).unwrap(),
            CollectionFormat::Yaml
        );
        assert!(matches!(
            detect_format(Path::new("companies.toml")),
            Err(LoaderError::UnsupportedFormat(ext)) if ext == "toml"
        ));
        assert!(matches!(
            detect_format(Path::new("companies")),
            Err(LoaderError::InvalidExtension)
        ));
    }
}
