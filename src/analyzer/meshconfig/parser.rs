//! Document decoding for the MeshConfig analyzer.
//!
//! Decoding happens strictly before the core is invoked: a file that
//! cannot be read or parsed is an error for the caller, never a finding.
//! The core only ever sees a decoded `serde_yaml::Value`.

use crate::error::Result;
use serde_yaml::Value;
use std::path::Path;

/// Supported document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// YAML (also accepts JSON content, as a YAML superset).
    #[default]
    Yaml,
    /// Strict JSON.
    Json,
}

impl DocumentFormat {
    /// Pick a format from a file extension. Unknown extensions fall back
    /// to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse document content into a configuration value.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        DocumentFormat::Json => {
            let json: serde_json::Value = serde_json::from_str(content)?;
            Ok(serde_yaml::to_value(json)?)
        }
    }
}

/// Read and decode a configuration document from disk, picking the
/// format from the file extension.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content, DocumentFormat::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_document() {
        let value = parse_document("kind: MeshConfig\napiVersion: v1", DocumentFormat::Yaml).unwrap();
        assert_eq!(value.get("kind").and_then(|k| k.as_str()), Some("MeshConfig"));
    }

    #[test]
    fn test_parse_json_document() {
        let value = parse_document(
            r#"{"kind": "MeshConfig", "apiVersion": "v1", "rbac": {"mode": "ON"}}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(
            value.get("rbac").and_then(|r| r.get("mode")).and_then(|m| m.as_str()),
            Some("ON")
        );
    }

    #[test]
    fn test_empty_content_decodes_to_null() {
        // An empty file is not a decode error; the analyzer reports it as
        // a File Format finding.
        let value = parse_document("", DocumentFormat::Yaml).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let err = parse_document("kind: [unclosed", DocumentFormat::Yaml);
        assert!(err.is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = parse_document("{not json", DocumentFormat::Json);
        assert!(err.is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("mesh.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("mesh.yaml")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("meshconfig")),
            DocumentFormat::Yaml
        );
    }
}
