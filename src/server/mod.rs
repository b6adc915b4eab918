//! Server URL templates.
//!
//! An immutable table from server identifier to URL template. Templates
//! carry the `%s` placeholder exactly once (`"/%s"`,
//! `"https://cdn.example.com/%s"`) and are validated when the table is
//! built, so expansion can never fail.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Placeholder replaced by the computed relative path.
pub const TEMPLATE_PLACEHOLDER: &str = "%s";

/// Validation errors raised while building a [`ServerTemplates`] table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServerTemplateError {
    #[error("server identifiers must not be empty")]
    EmptyServerName,

    #[error(
        "URL template \"{template}\" for server \"{server}\" must contain \
         \"%s\" exactly once, found {count}"
    )]
    Placeholder {
        server: String,
        template: String,
        count: usize,
    },
}

/// A URL template parsed around its single placeholder.
///
/// Stored pre-split so expansion is one concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    prefix: String,
    suffix: String,
}

impl UrlTemplate {
    /// Parse a template string. Fails with the placeholder count when it
    /// is not exactly one.
    fn parse(template: &str) -> Result<Self, usize> {
        let count = template.matches(TEMPLATE_PLACEHOLDER).count();
        let Some((prefix, suffix)) = template.split_once(TEMPLATE_PLACEHOLDER) else {
            return Err(count);
        };
        if count != 1 {
            return Err(count);
        }
        Ok(Self {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        })
    }

    /// Substitute a relative path into the placeholder.
    pub fn expand(&self, relative_path: &str) -> String {
        format!("{}{}{}", self.prefix, relative_path, self.suffix)
    }
}

/// Immutable server identifier → URL template table.
///
/// Built once at generator construction; invalid entries fail fast.
#[derive(Debug, Clone, Default)]
pub struct ServerTemplates {
    templates: FxHashMap<String, UrlTemplate>,
}

impl ServerTemplates {
    /// Build and validate the table from `(server, template)` pairs.
    pub fn new<I, K, V>(entries: I) -> Result<Self, ServerTemplateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut templates = FxHashMap::default();
        for (server, template) in entries {
            let server = server.into();
            let template = template.as_ref();
            if server.is_empty() {
                return Err(ServerTemplateError::EmptyServerName);
            }
            let parsed =
                UrlTemplate::parse(template).map_err(|count| ServerTemplateError::Placeholder {
                    server: server.clone(),
                    template: template.to_owned(),
                    count,
                })?;
            templates.insert(server, parsed);
        }
        Ok(Self { templates })
    }

    /// Look up the template for a server identifier.
    pub fn get(&self, server: &str) -> Option<&UrlTemplate> {
        self.templates.get(server)
    }

    pub fn contains(&self, server: &str) -> bool {
        self.templates.contains_key(server)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand() {
        let servers = ServerTemplates::new([
            ("localhost", "/%s"),
            ("cdn", "https://cdn.example.com/%s"),
            ("versioned", "/assets/%s?v=2"),
        ])
        .unwrap();

        assert_eq!(servers.get("localhost").unwrap().expand("css/style.css"), "/css/style.css");
        assert_eq!(
            servers.get("cdn").unwrap().expand("js/app.js"),
            "https://cdn.example.com/js/app.js"
        );
        assert_eq!(
            servers.get("versioned").unwrap().expand("logo.png"),
            "/assets/logo.png?v=2"
        );
    }

    #[test]
    fn test_missing_placeholder_fails_fast() {
        let err = ServerTemplates::new([("localhost", "/static/")]).unwrap_err();
        assert_eq!(
            err,
            ServerTemplateError::Placeholder {
                server: "localhost".to_owned(),
                template: "/static/".to_owned(),
                count: 0,
            }
        );
    }

    #[test]
    fn test_duplicate_placeholder_fails_fast() {
        let err = ServerTemplates::new([("localhost", "/%s/%s")]).unwrap_err();
        assert!(matches!(err, ServerTemplateError::Placeholder { count: 2, .. }));
    }

    #[test]
    fn test_empty_server_name_fails_fast() {
        let err = ServerTemplates::new([("", "/%s")]).unwrap_err();
        assert_eq!(err, ServerTemplateError::EmptyServerName);
    }

    #[test]
    fn test_unknown_server_is_absent() {
        let servers = ServerTemplates::new([("localhost", "/%s")]).unwrap();
        assert!(servers.get("foobar").is_none());
        assert!(servers.contains("localhost"));
        assert_eq!(servers.len(), 1);
    }
}
