#![deny(missing_docs)]

//! # Postman Collection Models
//!
//! Output structures in the Postman v1 collection layout. Fields the
//! converter never touches are kept in a flattened `extra` map so that
//! whatever the boilerplate template declares survives into the output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The output root: folders, a flat request list and an embedded environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection id.
    #[serde(default)]
    pub id: String,
    /// Collection name (the API title).
    #[serde(default)]
    pub name: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,
    /// One folder per top-level resource, empty when grouping is off.
    #[serde(default)]
    pub folders: Vec<Folder>,
    /// Every synthesized request in traversal order.
    #[serde(default)]
    pub requests: Vec<RequestRecord>,
    /// Variables extracted from URI parameters.
    #[serde(default)]
    pub environment: Environment,
    /// Template fields carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named group of requests belonging to one top-level resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder id.
    pub id: String,
    /// The top-level resource's relative URI.
    pub name: String,
    /// Always empty; present for importers that expect it.
    #[serde(default)]
    pub description: String,
    /// Ids of contained requests in traversal order.
    #[serde(default)]
    pub order: Vec<String>,
    /// Name of the owning collection.
    #[serde(default)]
    pub collection_name: String,
    /// Id of the owning collection.
    #[serde(default)]
    pub collection_id: String,
}

/// Body encoding mode of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Free-form payload in `rawModeData`.
    Raw,
    /// `application/x-www-form-urlencoded`.
    Urlencoded,
    /// `multipart/form-data`.
    #[default]
    Params,
}

/// A form field placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormParam {
    /// Field name.
    pub key: String,
    /// Always blank; filled in by a human.
    #[serde(default)]
    pub value: String,
    /// Field kind; placeholders are `text`.
    #[serde(default = "FormParam::default_type", rename = "type")]
    pub param_type: String,
    /// Whether the field is sent.
    #[serde(default = "FormParam::enabled_by_default")]
    pub enabled: bool,
}

impl FormParam {
    /// A blank text field named `key`.
    pub fn placeholder(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            param_type: Self::default_type(),
            enabled: true,
        }
    }

    fn default_type() -> String {
        "text".to_string()
    }

    fn enabled_by_default() -> bool {
        true
    }
}

/// One request in the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    /// Request id.
    #[serde(default)]
    pub id: String,
    /// Id of the owning collection.
    #[serde(default)]
    pub collection_id: String,
    /// HTTP method as declared in the source document.
    #[serde(default)]
    pub method: String,
    /// Display name: the full URI minus the base URI.
    #[serde(default)]
    pub name: String,
    /// Request URL, possibly ending in a `?a=&b=` placeholder query string.
    #[serde(default)]
    pub url: String,
    /// Header block of `Name: \n` lines.
    #[serde(default)]
    pub headers: String,
    /// Markdown description, capped at 500 characters plus `...`.
    #[serde(default)]
    pub description: String,
    /// Body encoding mode.
    #[serde(default)]
    pub data_mode: DataMode,
    /// Raw body payload.
    #[serde(default)]
    pub raw_mode_data: String,
    /// Form field placeholders.
    #[serde(default)]
    pub data: Vec<FormParam>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: i64,
    /// Template fields carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A set of placeholder variables for one collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment id.
    #[serde(default)]
    pub id: String,
    /// `"<collection name>'s Environment"`.
    #[serde(default)]
    pub name: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,
    /// Variables in first-seen order.
    #[serde(default)]
    pub values: Vec<EnvVariable>,
    /// Template fields carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    /// Parameter name, unique within an environment.
    pub key: String,
    /// Always blank.
    #[serde(default)]
    pub value: String,
    /// Display name, falling back to `key`.
    pub name: String,
    /// Declared type, falling back to `string`.
    #[serde(rename = "type")]
    pub var_type: String,
    /// Always `true`.
    pub enabled: bool,
}
