//! # Resource Tree Walker
//!
//! Depth-first fold over the resource tree. Each call returns the requests
//! and environment variables of one subtree; the caller merges them.

use tracing::debug;

use super::context::ConversionContext;
use super::environment::EnvironmentBuilder;
use super::request::synthesize;
use super::uri::rewrite_placeholders;
use crate::postman::RequestRecord;
use crate::raml::ResourceNode;

/// What one resource subtree contributes to the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subtree {
    /// The root node's relative URI after placeholder rewriting.
    pub relative_uri: String,
    /// Requests of the root node, then of each child subtree, in order.
    pub requests: Vec<RequestRecord>,
    /// URI parameters in first-seen order.
    pub environment: EnvironmentBuilder,
}

impl Subtree {
    /// Ids of all requests in traversal order.
    pub fn request_ids(&self) -> Vec<String> {
        self.requests.iter().map(|r| r.id.clone()).collect()
    }
}

/// Walks `node`, whose parent resolved to `parent_uri`.
///
/// `baseUriParameters` rewrite only the inherited URI and `uriParameters`
/// only the node's own segment; segments composed by ancestors are final.
pub fn walk(ctx: &ConversionContext<'_>, node: &ResourceNode, parent_uri: &str) -> Subtree {
    let mut environment = EnvironmentBuilder::new();

    let base_uri = rewrite_placeholders(parent_uri, node.base_uri_parameters.keys());
    environment.register_params(&node.base_uri_parameters);

    let relative_uri = rewrite_placeholders(&node.relative_uri, node.uri_parameters.keys());
    environment.register_params(&node.uri_parameters);

    let resource_uri = format!("{}{}", base_uri, relative_uri);
    debug!(
        uri = %resource_uri,
        methods = node.methods.len(),
        children = node.resources.len(),
        "converting resource"
    );

    let mut requests: Vec<RequestRecord> = node
        .methods
        .iter()
        .map(|method| synthesize(ctx, method, &resource_uri))
        .collect();

    for child in &node.resources {
        let subtree = walk(ctx, child, &resource_uri);
        requests.extend(subtree.requests);
        environment.merge(subtree.environment);
    }

    Subtree {
        relative_uri,
        requests,
        environment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::services::Services;
    use crate::postman::Boilerplate;
    use crate::raml::RamlDocument;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resource(value: serde_json::Value) -> ResourceNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_composes_nested_uris() {
        let template = Boilerplate::embedded().unwrap();
        let services = Services::deterministic();
        let ctx = ConversionContext {
            base_uri: "/api/:version".into(),
            collection_id: String::new(),
            prototype: &template.prototype,
            services: &services,
        };

        let node = resource(json!({
            "relativeUri": "/users",
            "methods": [{ "method": "get" }],
            "resources": [{
                "relativeUri": "/{id}",
                "uriParameters": { "id": { "type": "integer", "displayName": "User id" } },
                "methods": [{ "method": "get" }, { "method": "delete" }],
                "resources": [{
                    "relativeUri": "/posts/{postId}",
                    "uriParameters": { "postId": {} },
                    "methods": [{ "method": "get" }]
                }]
            }]
        }));

        let subtree = walk(&ctx, &node, "/api/:version");
        let urls: Vec<&str> = subtree.requests.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "/api/:version/users",
                "/api/:version/users/:id",
                "/api/:version/users/:id",
                "/api/:version/users/:id/posts/:postId",
            ]
        );
        let names: Vec<&str> = subtree.requests.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names[3], "/users/:id/posts/:postId");
        assert_eq!(subtree.relative_uri, "/users");

        let env = subtree.environment.into_values();
        assert_eq!(env.len(), 2);
        assert_eq!(env[0].key, "id");
        assert_eq!(env[0].var_type, "integer");
        assert_eq!(env[1].key, "postId");
        assert_eq!(env[1].name, "postId");
    }

    #[test]
    fn test_base_uri_parameters_override_inherited_uri_only() {
        let template = Boilerplate::embedded().unwrap();
        let services = Services::deterministic();
        let ctx = ConversionContext {
            base_uri: "http://{region}.api.test".into(),
            collection_id: String::new(),
            prototype: &template.prototype,
            services: &services,
        };

        let node = resource(json!({
            "relativeUri": "/reports",
            "methods": [{ "method": "get" }],
            "resources": [{
                "relativeUri": "/{region}",
                "baseUriParameters": { "region": { "displayName": "Region" } },
                "methods": [{ "method": "get" }]
            }]
        }));

        let subtree = walk(&ctx, &node, "http://{region}.api.test");
        assert_eq!(subtree.requests[0].url, "http://{region}.api.test/reports");
        // Only the inherited part is rewritten; the child's own segment keeps its braces.
        assert_eq!(subtree.requests[1].url, "http://:region.api.test/reports/{region}");
        assert_eq!(subtree.environment.get("region").unwrap().name, "Region");
    }

    #[test]
    fn test_resource_without_methods_still_recurses() {
        let template = Boilerplate::embedded().unwrap();
        let services = Services::deterministic();
        let ctx = ConversionContext {
            base_uri: String::new(),
            collection_id: String::new(),
            prototype: &template.prototype,
            services: &services,
        };

        let node = resource(json!({
            "relativeUri": "/empty",
            "resources": [{ "relativeUri": "/leaf", "methods": [{ "method": "put" }] }]
        }));

        let subtree = walk(&ctx, &node, "");
        assert_eq!(subtree.requests.len(), 1);
        assert_eq!(subtree.requests[0].url, "/empty/leaf");
    }

    #[test]
    fn test_request_count_matches_method_count() {
        let template = Boilerplate::embedded().unwrap();
        let services = Services::system();
        let ctx = ConversionContext {
            base_uri: String::new(),
            collection_id: String::new(),
            prototype: &template.prototype,
            services: &services,
        };

        let doc: RamlDocument = serde_json::from_value(json!({
            "resources": [{
                "relativeUri": "/a",
                "methods": [{ "method": "get" }, { "method": "post" }],
                "resources": [
                    { "relativeUri": "/b", "methods": [{ "method": "get" }] },
                    { "relativeUri": "/c", "resources": [{ "relativeUri": "/d", "methods": [{ "method": "patch" }] }] }
                ]
            }]
        }))
        .unwrap();

        let subtree = walk(&ctx, &doc.resources[0], "");
        assert_eq!(subtree.requests.len(), doc.method_count());

        let mut ids = subtree.request_ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
