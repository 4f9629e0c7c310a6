#![deny(missing_docs)]

//! # RAML Input Tree
//!
//! - **document**: The parsed resource tree handed over by a RAML parser.
//! - **normalization**: Parse-boundary folding of loosely shaped declarations.
//! - **load**: Reading a serialized tree from disk.

pub mod document;
pub mod load;
pub mod normalization;

pub use document::{BodyDef, MethodDef, ParamDef, ParamMap, RamlDocument, ResourceNode};
pub use load::load_document;
pub use normalization::merge_named_entries;
