#![deny(missing_docs)]

//! # Validate Command
//!
//! Checks an existing collection or environment file against the bundled
//! schemas.

use std::fs;
use std::path::PathBuf;

use raml2postman_core::{AppError, CollectionValidator, SchemaValidator, ValidationTarget};
use serde_json::Value;
use tracing::warn;

use crate::error::CliResult;

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// JSON file to check.
    #[clap(long, short)]
    pub input: PathBuf,

    /// Document kind: `collection` or `environment`.
    #[clap(long, default_value = "collection")]
    pub target: ValidationTarget,
}

/// Executes the validation, returning whether the file conforms.
pub fn execute(args: &ValidateArgs) -> CliResult<bool> {
    if !args.input.exists() {
        return Err(AppError::General(format!("Input file not found: {:?}", args.input)).into());
    }

    let document: Value = serde_json::from_str(&fs::read_to_string(&args.input)?)?;
    let report = SchemaValidator::new()?.validate(args.target, &document);

    for diagnostic in &report.diagnostics {
        warn!(target_kind = %report.target, "{}", diagnostic);
    }
    if report.valid {
        println!("{:?} is a valid {}", args.input, report.target);
    } else {
        println!(
            "{:?} is not a valid {} ({} problem(s))",
            args.input,
            report.target,
            report.diagnostics.len()
        );
    }

    Ok(report.valid)
}
