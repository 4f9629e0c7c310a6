#![deny(missing_docs)]

//! # raml2postman Core
//!
//! Converts a parsed RAML resource tree into a Postman collection with an
//! environment of URI parameter placeholders.
//!
//! ```no_run
//! use raml2postman_core::{load_document, ConvertOptions, Converter};
//!
//! let document = load_document("api.yaml".as_ref())?;
//! let conversion = Converter::new(ConvertOptions::default())?.convert(&document);
//! println!("{}", serde_json::to_string_pretty(&conversion.collection)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Shared error types.
pub mod error;

/// Parsed RAML input tree.
pub mod raml;

/// Postman output model and boilerplate template.
pub mod postman;

/// Tree traversal and collection assembly.
pub mod convert;

/// Post-conversion structural validation.
pub mod validation;

pub use convert::{Conversion, ConvertOptions, Converter, Services};
pub use error::{AppError, AppResult};
pub use postman::{Boilerplate, Collection, Environment};
pub use raml::{load_document, RamlDocument};
pub use validation::{CollectionValidator, SchemaValidator, ValidationReport, ValidationTarget};
