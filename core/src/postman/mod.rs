#![deny(missing_docs)]

//! # Postman Output
//!
//! - **models**: Collection, folder, request and environment structures.
//! - **template**: The boilerplate skeleton supplying default shapes.

pub mod models;
pub mod template;

pub use models::{Collection, DataMode, EnvVariable, Environment, Folder, FormParam, RequestRecord};
pub use template::{Boilerplate, DEFAULT_BOILERPLATE};
