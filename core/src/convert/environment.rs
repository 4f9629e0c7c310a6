//! # Environment Builder
//!
//! Collects one placeholder variable per distinct URI parameter name.
//! The first registration of a key wins; later ones are ignored.

use indexmap::IndexMap;
use tracing::trace;

use crate::postman::EnvVariable;
use crate::raml::ParamMap;

/// Ordered, deduplicated environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentBuilder {
    vars: IndexMap<String, EnvVariable>,
}

impl EnvironmentBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `key` unless it is already present.
    ///
    /// Missing or empty `var_type` falls back to `string`, missing or empty
    /// `display_name` falls back to the key. Returns whether a variable was
    /// inserted.
    pub fn register(&mut self, key: &str, var_type: Option<&str>, display_name: Option<&str>) -> bool {
        if self.vars.contains_key(key) {
            trace!(key, "environment key already registered");
            return false;
        }

        let var = EnvVariable {
            key: key.to_string(),
            value: String::new(),
            name: display_name
                .filter(|s| !s.is_empty())
                .unwrap_or(key)
                .to_string(),
            var_type: var_type
                .filter(|s| !s.is_empty())
                .unwrap_or("string")
                .to_string(),
            enabled: true,
        };
        self.vars.insert(key.to_string(), var);
        true
    }

    /// Registers every parameter of a URI parameter map, in declaration order.
    pub fn register_params(&mut self, params: &ParamMap) {
        for (name, param) in params {
            self.register(
                name,
                param.param_type.as_deref(),
                param.display_name.as_deref(),
            );
        }
    }

    /// Appends the variables of `other` whose keys are not yet present.
    pub fn merge(&mut self, other: EnvironmentBuilder) {
        for (key, var) in other.vars {
            self.vars.entry(key).or_insert(var);
        }
    }

    /// Looks up a registered variable.
    pub fn get(&self, key: &str) -> Option<&EnvVariable> {
        self.vars.get(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// The variables in first-seen order.
    pub fn into_values(self) -> Vec<EnvVariable> {
        self.vars.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raml::ParamDef;

    #[test]
    fn test_first_registration_wins() {
        let mut env = EnvironmentBuilder::new();
        assert!(env.register("id", Some("integer"), Some("User id")));
        assert!(!env.register("id", Some("string"), Some("Other")));

        assert_eq!(env.len(), 1);
        let var = env.get("id").unwrap();
        assert_eq!(var.var_type, "integer");
        assert_eq!(var.name, "User id");
        assert_eq!(var.value, "");
        assert!(var.enabled);
    }

    #[test]
    fn test_fallbacks() {
        let mut env = EnvironmentBuilder::new();
        env.register("version", None, None);
        env.register("slug", Some(""), Some(""));

        let version = env.get("version").unwrap();
        assert_eq!(version.name, "version");
        assert_eq!(version.var_type, "string");
        assert_eq!(env.get("slug").unwrap().name, "slug");
    }

    #[test]
    fn test_register_params_in_order() {
        let mut params = ParamMap::new();
        params.insert("b".into(), ParamDef::default());
        params.insert(
            "a".into(),
            ParamDef {
                param_type: Some("number".into()),
                display_name: None,
            },
        );

        let mut env = EnvironmentBuilder::new();
        env.register_params(&params);
        let keys: Vec<String> = env.into_values().into_iter().map(|v| v.key).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_merge_keeps_existing_and_order() {
        let mut outer = EnvironmentBuilder::new();
        outer.register("version", Some("string"), None);

        let mut inner = EnvironmentBuilder::new();
        inner.register("id", Some("integer"), None);
        inner.register("version", Some("number"), Some("Ignored"));

        outer.merge(inner);
        let values = outer.into_values();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].key, "version");
        assert_eq!(values[0].var_type, "string");
        assert_eq!(values[1].key, "id");
    }
}
