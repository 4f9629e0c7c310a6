//! # Parsed RAML Tree
//!
//! Serde model of the document tree a RAML parser hands over. Every map is
//! insertion-ordered so that "first declared" follows document order.

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

use super::normalization::{named_entries, nullable_map, nullable_vec};

/// URI, header, query or form parameters keyed by name.
pub type ParamMap = IndexMap<String, ParamDef>;

/// The root of a parsed API description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamlDocument {
    /// API title, used as the collection name.
    #[serde(default)]
    pub title: Option<String>,
    /// Base URI template, e.g. `https://api.example.com/{version}`.
    #[serde(default)]
    pub base_uri: Option<String>,
    /// Parameters declared for placeholders in `base_uri`.
    #[serde(default, deserialize_with = "nullable_map")]
    pub base_uri_parameters: ParamMap,
    /// Top-level resources.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub resources: Vec<ResourceNode>,
    /// Trait declarations by name.
    #[serde(default, deserialize_with = "named_entries")]
    pub traits: IndexMap<String, Value>,
    /// Schema declarations by name.
    #[serde(default, deserialize_with = "named_entries")]
    pub schemas: IndexMap<String, Value>,
    /// Resource type declarations by name.
    #[serde(default, deserialize_with = "named_entries")]
    pub resource_types: IndexMap<String, Value>,
}

impl RamlDocument {
    /// The declared base URI, or `""` when the document has none.
    pub fn base_uri(&self) -> &str {
        self.base_uri.as_deref().unwrap_or("")
    }

    /// Looks up a trait declaration by name.
    pub fn trait_named(&self, name: &str) -> Option<&Value> {
        self.traits.get(name)
    }

    /// Looks up a schema declaration by name.
    pub fn schema_named(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Looks up a resource type declaration by name.
    pub fn resource_type_named(&self, name: &str) -> Option<&Value> {
        self.resource_types.get(name)
    }

    /// Total number of methods declared anywhere in the resource tree.
    pub fn method_count(&self) -> usize {
        self.resources.iter().map(ResourceNode::method_count).sum()
    }
}

/// One node of the resource tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    /// URI segment relative to the parent, e.g. `/users/{id}`.
    #[serde(default)]
    pub relative_uri: String,
    /// Parameters for placeholders in `relative_uri`.
    #[serde(default, deserialize_with = "nullable_map")]
    pub uri_parameters: ParamMap,
    /// Parameters overriding placeholders inherited from the base URI.
    #[serde(default, deserialize_with = "nullable_map")]
    pub base_uri_parameters: ParamMap,
    /// HTTP methods accepted by this resource.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub methods: Vec<MethodDef>,
    /// Nested resources.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub resources: Vec<ResourceNode>,
}

impl ResourceNode {
    /// Number of methods in this node and all of its descendants.
    pub fn method_count(&self) -> usize {
        self.methods.len()
            + self
                .resources
                .iter()
                .map(ResourceNode::method_count)
                .sum::<usize>()
    }
}

/// One HTTP method attached to a resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDef {
    /// HTTP verb as declared (`get`, `post`, ...).
    #[serde(default)]
    pub method: String,
    /// Markdown description.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared request headers.
    #[serde(default, deserialize_with = "nullable_map")]
    pub headers: ParamMap,
    /// Declared query parameters.
    #[serde(default, deserialize_with = "nullable_map")]
    pub query_parameters: ParamMap,
    /// Request bodies keyed by content type.
    #[serde(default, deserialize_with = "nullable_map")]
    pub body: IndexMap<String, BodyDef>,
}

/// A request body declaration for one content type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDef {
    /// Literal example payload.
    #[serde(default)]
    pub example: Option<Value>,
    /// Declared schema. Carried but never expanded into an example.
    #[serde(default)]
    pub schema: Option<Value>,
    /// Form fields for url-encoded and multipart bodies.
    #[serde(default, deserialize_with = "nullable_map")]
    pub form_parameters: ParamMap,
}

impl BodyDef {
    /// The example as a raw payload string.
    ///
    /// Strings are used verbatim, structured examples are rendered as
    /// pretty JSON, and a missing example yields `""`.
    pub fn example_payload(&self) -> String {
        match &self.example {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => serde_json::to_string_pretty(other).unwrap_or_default(),
        }
    }
}

/// Descriptor shared by URI, header, query and form parameters.
///
/// A parameter declared with several alternative types arrives as a list;
/// it carries no single type or display name, so both stay unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ParamShape")]
pub struct ParamDef {
    /// Declared type (`string`, `integer`, ...).
    pub param_type: Option<String>,
    /// Human readable name.
    pub display_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ParamShape {
    Alternatives(Vec<IgnoredAny>),
    Single(ParamFields),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParamFields {
    #[serde(default, rename = "type")]
    param_type: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

impl From<ParamShape> for ParamDef {
    fn from(shape: ParamShape) -> Self {
        match shape {
            ParamShape::Alternatives(_) => ParamDef::default(),
            ParamShape::Single(fields) => ParamDef {
                param_type: fields.param_type,
                display_name: fields.display_name,
            },
        }
    }
}
