//! Mapping rules read from the discovery index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::PathPattern;

/// Rule attribute naming the server whose URL template is expanded.
pub const SERVER_ATTRIBUTE: &str = "server";

/// Rule attribute carrying the public path segment that replaces the
/// matched prefix.
pub const PATH_ATTRIBUTE: &str = "path";

/// One registered path → URL directive.
///
/// Rules are owned and persisted by the discovery index; the generator
/// only reads them. The attribute bag is free-form on the wire, but the
/// two attributes the generator cares about are exposed through typed
/// accessors ([`server`](Self::server), [`target_path`](Self::target_path)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    pattern: PathPattern,
    category: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl MappingRule {
    /// Create a rule for the given pattern and category, with no
    /// attributes.
    pub fn new(pattern: &str, category: impl Into<String>) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            category: category.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an attribute (builder style).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The parsed path pattern.
    #[inline]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The category the rule is registered under.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Look up a raw attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The server identifier attribute, if present.
    #[inline]
    pub fn server(&self) -> Option<&str> {
        self.attribute(SERVER_ATTRIBUTE)
    }

    /// The public path segment attribute, if present.
    #[inline]
    pub fn target_path(&self) -> Option<&str> {
        self.attribute(PATH_ATTRIBUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_attribute_accessors() {
        let rule = MappingRule::new("/path/css{,/**/*}", "public-resource")
            .with_attribute(SERVER_ATTRIBUTE, "localhost")
            .with_attribute(PATH_ATTRIBUTE, "css");

        assert_eq!(rule.server(), Some("localhost"));
        assert_eq!(rule.target_path(), Some("css"));
        assert_eq!(rule.attribute("unknown"), None);
    }

    #[test]
    fn test_missing_attributes_read_as_none() {
        let rule = MappingRule::new("/path", "public-resource");
        assert_eq!(rule.server(), None);
        assert_eq!(rule.target_path(), None);
    }

    #[test]
    fn test_deserialize_persisted_form() {
        let rule: MappingRule = toml::from_str(
            r#"
            pattern = "/path/css{,/**/*}"
            category = "public-resource"

            [attributes]
            server = "localhost"
            path = "css"
            "#,
        )
        .unwrap();

        assert_eq!(rule.category(), "public-resource");
        assert_eq!(rule.server(), Some("localhost"));
        assert!(rule.pattern().matches("/path/css/style.css"));
    }
}
