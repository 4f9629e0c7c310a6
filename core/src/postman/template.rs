//! # Boilerplate Template
//!
//! The fixed skeleton that supplies default shapes for the collection, the
//! environment and the prototype request cloned for every method.

use std::fs;
use std::path::Path;

use super::models::{Collection, RequestRecord};
use crate::error::{AppError, AppResult};

/// The skeleton shipped with the crate.
pub const DEFAULT_BOILERPLATE: &str = include_str!("../../templates/postman-boilerplate.json");

/// A parsed template: the collection skeleton with its request list emptied,
/// and the first request kept aside as the prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct Boilerplate {
    /// Collection defaults, with `requests` cleared.
    pub collection: Collection,
    /// Shape cloned for each synthesized request.
    pub prototype: RequestRecord,
}

impl Boilerplate {
    /// Parses a template from JSON.
    ///
    /// Fails when the content is not a collection or declares no request.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let mut collection: Collection = serde_json::from_str(content)
            .map_err(|e| AppError::Template(format!("Invalid boilerplate JSON: {}", e)))?;

        if collection.requests.is_empty() {
            return Err(AppError::Template(
                "Boilerplate declares no prototype request".to_string(),
            ));
        }
        let prototype = collection.requests.remove(0);
        collection.requests.clear();

        Ok(Self {
            collection,
            prototype,
        })
    }

    /// Reads and parses a template file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Template(format!("Failed to read boilerplate {:?}: {}", path, e))
        })?;
        Self::from_json_str(&content)
    }

    /// The embedded default template.
    pub fn embedded() -> AppResult<Self> {
        Self::from_json_str(DEFAULT_BOILERPLATE)
    }
}
