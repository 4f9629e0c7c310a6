#![deny(missing_docs)]

//! # raml2postman CLI
//!
//! Command Line Interface for converting parsed RAML trees into Postman
//! collections.
//!
//! Supported Commands:
//! - `convert`: Parsed RAML tree -> Postman collection + environment.
//! - `validate`: Checks a collection or environment file.
//!
//! Exit status is `0` on success, `1` on a fatal error and `2` when the
//! output was written but failed validation.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod convert;
mod error;
mod logging;
mod validate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "RAML to Postman converter")]
struct Cli {
    /// Log level used when `RUST_LOG` is not set.
    #[clap(long, global = true, default_value = "info", env = "RAML2POSTMAN_LOG")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a parsed RAML tree into a Postman collection.
    Convert(convert::ConvertArgs),
    /// Validate a collection or environment file.
    Validate(validate::ValidateArgs),
}

fn main() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let valid = match &cli.command {
        Commands::Convert(args) => convert::execute(args)?,
        Commands::Validate(args) => validate::execute(args)?,
    };

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
