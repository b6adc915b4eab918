//! URL generation pipeline.
//!
//! Each call is a linear pipeline with three failure exits:
//!
//! ```text
//! match rule --> extract + substitute --> expand template --> [relativize]
//!     |                                        |                   |
//!     v                                        v                   v
//! ResourceNotMapped                      ServerNotFound    RelativizationFailed
//! ```
//!
//! The generator is stateless aside from its immutable template table and
//! the discovery handle; it is safe to call concurrently without
//! synchronization.

mod relativize;

use thiserror::Error;

use crate::core::{join_web_path, normalize_segment};
use crate::discovery::Discovery;
use crate::server::ServerTemplates;

use relativize::relativize;

/// Category under which public-resource mapping rules are registered.
pub const PUBLIC_RESOURCE_CATEGORY: &str = "public-resource";

/// Failure modes of [`UrlGenerator::generate_url`]. All are
/// non-retryable; the generator never returns a partial URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateUrlError {
    /// No registered rule's pattern matches the requested path.
    #[error("The path \"{0}\" is not mapped to any public URL")]
    ResourceNotMapped(String),

    /// The matched rule names a server the template table does not know.
    #[error("The server \"{0}\" does not exist")]
    ServerNotFound(String),

    /// A current URL was supplied but no relative reference exists.
    #[error("Cannot generate URL for \"{path}\" to current url \"{current_url}\".")]
    RelativizationFailed { path: String, current_url: String },
}

/// Resolves repository paths to public URLs using the mapping rules
/// registered in a [`Discovery`] index.
#[derive(Debug)]
pub struct UrlGenerator<D> {
    discovery: D,
    servers: ServerTemplates,
}

impl<D: Discovery> UrlGenerator<D> {
    pub fn new(discovery: D, servers: ServerTemplates) -> Self {
        Self { discovery, servers }
    }

    /// Generate the public URL for a repository path.
    ///
    /// The first structurally matching rule wins, in the order the
    /// discovery returns rules; there is no scoring or longest-prefix
    /// preference. When `current_url` is supplied the result is rewritten
    /// as the shortest relative reference from that location.
    pub fn generate_url(
        &self,
        repository_path: &str,
        current_url: Option<&str>,
    ) -> Result<String, GenerateUrlError> {
        let rules = self.discovery.rules_for(PUBLIC_RESOURCE_CATEGORY);
        let (rule, suffix) = rules
            .iter()
            .find_map(|rule| {
                rule.pattern()
                    .suffix_of(repository_path)
                    .map(|suffix| (rule, suffix))
            })
            .ok_or_else(|| GenerateUrlError::ResourceNotMapped(repository_path.to_owned()))?;
        tracing::debug!(
            pattern = %rule.pattern(),
            path = repository_path,
            "selected mapping rule"
        );

        let server = rule.server().unwrap_or_default();
        let segment = normalize_segment(rule.target_path().unwrap_or_default());
        let relative_path = join_web_path(segment, suffix);

        let template = self
            .servers
            .get(server)
            .ok_or_else(|| GenerateUrlError::ServerNotFound(server.to_owned()))?;
        let url = template.expand(&relative_path);
        tracing::trace!(%url, server, "expanded server template");

        match current_url {
            Some(current) => relativize(&url, current).ok_or_else(|| {
                GenerateUrlError::RelativizationFailed {
                    path: repository_path.to_owned(),
                    current_url: current.to_owned(),
                }
            }),
            None => Ok(url),
        }
    }

    /// The validated template table the generator was built with.
    pub fn servers(&self) -> &ServerTemplates {
        &self.servers
    }
}
