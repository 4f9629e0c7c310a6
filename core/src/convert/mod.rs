#![deny(missing_docs)]

//! # RAML to Postman Conversion
//!
//! - **uri**: `{param}` to `:param` rewriting.
//! - **environment**: Deduplicated environment variable collection.
//! - **request**: Request synthesis for one method.
//! - **walker**: Recursive fold over the resource tree.
//! - **assembler**: The conversion driver.

pub mod assembler;
pub mod context;
pub mod environment;
pub mod options;
pub mod request;
pub mod services;
pub mod uri;
pub mod walker;

pub use assembler::{Conversion, Converter};
pub use context::ConversionContext;
pub use environment::EnvironmentBuilder;
pub use options::ConvertOptions;
pub use request::synthesize;
pub use services::{Clock, Deterministic, IdSource, Services, SystemClock, UuidIds};
pub use uri::rewrite_placeholders;
pub use walker::{walk, Subtree};
