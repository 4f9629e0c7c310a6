//! # Document Loading
//!
//! Reads a parsed RAML tree that was serialized to JSON or YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::document::RamlDocument;
use crate::error::{AppError, AppResult};

impl RamlDocument {
    /// Parses a document tree from a JSON string.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a document tree from a YAML string.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Loads a document tree from disk.
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_document(path: &Path) -> AppResult<RamlDocument> {
    if !path.exists() {
        return Err(AppError::General(format!(
            "Input file not found: {:?}",
            path
        )));
    }

    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    debug!(path = %path.display(), format = ext, "loading parsed document");

    match ext {
        "json" => RamlDocument::from_json_str(&content),
        _ => RamlDocument::from_yaml_str(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_yaml_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api.yaml");
        fs::File::create(&path)
            .unwrap()
            .write_all(
                br#"
title: Zoo
baseUri: http://zoo/{version}
baseUriParameters:
  version:
    type: string
resources:
  - relativeUri: /animals
    methods:
      - method: get
"#,
            )
            .unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Zoo"));
        assert_eq!(doc.base_uri(), "http://zoo/{version}");
        assert_eq!(doc.resources[0].methods[0].method, "get");
    }

    #[test]
    fn test_load_json_tree() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api.json");
        fs::write(&path, r#"{ "title": "Zoo", "resources": [] }"#).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Zoo"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_document(&dir.path().join("nope.yaml"));
        match result.unwrap_err() {
            AppError::General(msg) => assert!(msg.contains("Input file not found")),
            other => panic!("Wrong error type: {other}"),
        }
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"title\": ").unwrap();
        assert!(matches!(load_document(&path), Err(AppError::Json(_))));
    }
}
