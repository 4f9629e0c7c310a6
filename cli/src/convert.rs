#![deny(missing_docs)]

//! # Convert Command
//!
//! Reads a parsed RAML tree, converts it and writes the collection plus a
//! standalone environment file.

use std::fs;
use std::path::{Path, PathBuf};

use raml2postman_core::{load_document, Boilerplate, ConvertOptions, Converter};
use serde::Serialize;
use tracing::info;

use crate::error::CliResult;

/// Arguments for the convert command.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Parsed RAML document tree, as JSON (`.json`) or YAML.
    #[clap(long, short)]
    pub input: PathBuf,

    /// Collection output path.
    /// If not provided, prints the collection JSON to stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Environment output path.
    /// Defaults to `<output stem>.environment.json` next to `--output`.
    #[clap(long)]
    pub env_output: Option<PathBuf>,

    /// Boilerplate template replacing the embedded one.
    #[clap(long, env = "RAML2POSTMAN_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Emit a flat request list without folders.
    #[clap(long, env = "RAML2POSTMAN_NO_GROUP")]
    pub no_group: bool,

    /// Empty ids and zero timestamps, for reproducible output.
    #[clap(long, env = "RAML2POSTMAN_TEST")]
    pub test: bool,

    /// Write single-line JSON instead of pretty-printed.
    #[clap(long)]
    pub compact: bool,
}

impl ConvertArgs {
    /// Conversion options selected by the flags.
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            group: !self.no_group,
            test: self.test,
        }
    }

    /// Where the environment file goes, if anywhere.
    pub fn environment_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.env_output {
            return Some(path.clone());
        }
        let output = self.output.as_ref()?;
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("collection");
        Some(output.with_file_name(format!("{}.environment.json", stem)))
    }
}

/// Executes the conversion.
///
/// Returns whether the generated collection passed validation. Output is
/// written either way.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ConvertArgs) -> CliResult<bool> {
    // 1. Load input and template before anything is written
    let document = load_document(&args.input)?;
    let mut converter = Converter::new(args.options())?;
    if let Some(path) = &args.template {
        converter = converter.with_template(Boilerplate::from_path(path)?);
    }

    // 2. Convert
    let conversion = converter.convert(&document);

    // 3. Write collection
    let collection_json = render(&conversion.collection, args.compact)?;
    match &args.output {
        Some(path) => {
            write_file(path, &collection_json)?;
            info!(path = %path.display(), "collection written");
        }
        None => println!("{}", collection_json),
    }

    // 4. Write environment
    if let Some(path) = args.environment_path() {
        write_file(&path, &render(conversion.environment(), args.compact)?)?;
        info!(path = %path.display(), "environment written");
    }

    Ok(conversion.is_valid())
}

fn render<T: Serialize>(value: &T, compact: bool) -> CliResult<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}

fn write_file(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}
