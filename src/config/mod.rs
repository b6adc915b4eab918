//! Configuration loading for the server template table.
//!
//! The table is the only configuration surface the generator owns: a
//! `[servers]` TOML section mapping server identifiers to URL templates,
//!
//! ```toml
//! [servers]
//! localhost = "/%s"
//! "static.example.com" = "https://static.example.com/%s"
//! ```
//!
//! Validation happens once, through [`ServerTemplates::new`]; a template
//! missing its placeholder fails the load.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::server::{ServerTemplateError, ServerTemplates};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid server template")]
    Template(#[from] ServerTemplateError),
}

/// The `[servers]` section: server identifier → URL template.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServersSection {
    #[serde(default)]
    pub servers: BTreeMap<String, String>,
}

impl ServersSection {
    /// Validate into the immutable template table.
    pub fn into_templates(self) -> Result<ServerTemplates, ServerTemplateError> {
        ServerTemplates::new(self.servers)
    }
}

/// Read and validate a server template table from a TOML file.
pub fn load_servers(path: &Path) -> Result<ServerTemplates, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_owned(), err))?;
    let section: ServersSection = toml::from_str(&raw)?;
    Ok(section.into_templates()?)
}
