//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The parsed input tree or a JSON template is not valid JSON.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// The parsed input tree is not valid YAML.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// The boilerplate template is unusable.
    #[from(ignore)]
    #[display("Template Error: {_0}")]
    Template(String),

    /// A validation schema failed to compile.
    #[from(ignore)]
    #[display("Schema Error: {_0}")]
    Schema(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::NotFound, "missing.raml");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String defaults to General, never Template or Schema
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
        assert!(app_err.to_string().starts_with("JSON Error:"));
    }

    #[test]
    fn test_template_manual_creation() {
        let app_err = AppError::Template("no prototype request".into());
        assert_eq!(
            format!("{}", app_err),
            "Template Error: no prototype request"
        );
    }
}
