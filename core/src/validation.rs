//! # Structural Validation
//!
//! Post-conversion shape checks. A failed check is reported, never raised:
//! the caller still receives the converted collection.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::postman::Collection;

const COLLECTION_SCHEMA: &str = include_str!("../schemas/collection.schema.json");
const ENVIRONMENT_SCHEMA: &str = include_str!("../schemas/environment.schema.json");

/// The document kind being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationTarget {
    /// A full collection with embedded environment.
    Collection,
    /// A standalone environment file.
    Environment,
}

impl ValidationTarget {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationTarget::Collection => "collection",
            ValidationTarget::Environment => "environment",
        }
    }
}

impl fmt::Display for ValidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationTarget {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collection" | "c" => Ok(ValidationTarget::Collection),
            "environment" | "env" | "e" => Ok(ValidationTarget::Environment),
            other => Err(AppError::General(format!(
                "Unknown validation target: {}",
                other
            ))),
        }
    }
}

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// What was checked.
    pub target: ValidationTarget,
    /// Whether the document conforms.
    pub valid: bool,
    /// One message per violation.
    pub diagnostics: Vec<String>,
}

impl ValidationReport {
    /// A passing report.
    pub fn passed(target: ValidationTarget) -> Self {
        Self {
            target,
            valid: true,
            diagnostics: Vec::new(),
        }
    }

    /// A report built from violation messages; valid when there are none.
    pub fn from_diagnostics(target: ValidationTarget, diagnostics: Vec<String>) -> Self {
        Self {
            target,
            valid: diagnostics.is_empty(),
            diagnostics,
        }
    }
}

/// Checks generated documents against a target shape.
pub trait CollectionValidator: Send + Sync {
    /// Validates an arbitrary JSON document.
    fn validate(&self, target: ValidationTarget, document: &Value) -> ValidationReport;

    /// Validates a typed collection.
    fn validate_collection(&self, collection: &Collection) -> ValidationReport {
        match serde_json::to_value(collection) {
            Ok(value) => self.validate(ValidationTarget::Collection, &value),
            Err(e) => ValidationReport::from_diagnostics(
                ValidationTarget::Collection,
                vec![format!("Collection could not be serialized: {}", e)],
            ),
        }
    }
}

/// Validator backed by the JSON Schemas shipped with the crate.
pub struct SchemaValidator {
    collection: jsonschema::Validator,
    environment: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compiles the embedded schemas.
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            collection: compile(COLLECTION_SCHEMA)?,
            environment: compile(ENVIRONMENT_SCHEMA)?,
        })
    }
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}

impl CollectionValidator for SchemaValidator {
    fn validate(&self, target: ValidationTarget, document: &Value) -> ValidationReport {
        let validator = match target {
            ValidationTarget::Collection => &self.collection,
            ValidationTarget::Environment => &self.environment,
        };
        let diagnostics = validator
            .iter_errors(document)
            .map(|e| e.to_string())
            .collect();
        ValidationReport::from_diagnostics(target, diagnostics)
    }
}

fn compile(source: &str) -> AppResult<jsonschema::Validator> {
    let schema: Value = serde_json::from_str(source)?;
    jsonschema::validator_for(&schema).map_err(|e| AppError::Schema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_parsing() {
        assert_eq!("c".parse::<ValidationTarget>().unwrap(), ValidationTarget::Collection);
        assert_eq!(
            "environment".parse::<ValidationTarget>().unwrap(),
            ValidationTarget::Environment
        );
        assert!("folder".parse::<ValidationTarget>().is_err());
    }

    #[test]
    fn test_default_collection_is_valid() {
        let validator = SchemaValidator::new().unwrap();
        let report = validator.validate_collection(&Collection::default());
        assert!(report.valid, "{:?}", report.diagnostics);
    }

    #[test]
    fn test_bad_data_mode_is_reported() {
        let validator = SchemaValidator::new().unwrap();
        let document = json!({
            "id": "",
            "name": "Broken",
            "requests": [{
                "id": "", "url": "/x", "method": "get", "name": "/x",
                "collectionId": "", "dataMode": "graphql"
            }]
        });

        let report = validator.validate(ValidationTarget::Collection, &document);
        assert!(!report.valid);
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn test_environment_requires_values() {
        let validator = SchemaValidator::new().unwrap();
        let report = validator.validate(ValidationTarget::Environment, &json!({ "name": "x" }));
        assert!(!report.valid);

        let report = validator.validate(
            ValidationTarget::Environment,
            &json!({ "name": "x", "values": [{ "key": "id", "value": "" }] }),
        );
        assert_eq!(report, ValidationReport::passed(ValidationTarget::Environment));
    }
}
