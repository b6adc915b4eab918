//! Resolve virtual repository paths to public URLs via discovery mapping
//! rules.
//!
//! Web-asset pipelines address files (CSS, JS, images) through a virtual
//! resource tree; where a file is actually served from is declared by
//! mapping rules registered in a discovery index. This crate implements
//! the resolution pipeline: match the most relevant rule, swap the
//! matched prefix for the rule's public path segment, expand the target
//! server's URL template, and optionally rewrite the result relative to a
//! current URL.
//!
//! # Example
//!
//! ```
//! use urlgen::{InMemoryDiscovery, MappingRule, ServerTemplates, UrlGenerator};
//! use urlgen::PUBLIC_RESOURCE_CATEGORY;
//!
//! let mut discovery = InMemoryDiscovery::new();
//! discovery.register(
//!     MappingRule::new("/app/public{,/**/*}", PUBLIC_RESOURCE_CATEGORY)
//!         .with_attribute("server", "localhost")
//!         .with_attribute("path", "/"),
//! );
//!
//! let servers = ServerTemplates::new([("localhost", "/%s")])?;
//! let generator = UrlGenerator::new(discovery, servers);
//!
//! assert_eq!(
//!     generator.generate_url("/app/public/css/style.css", None)?,
//!     "/css/style.css"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The generator performs no I/O and keeps no per-call state; it is safe
//! to share across threads as long as the [`Discovery`] implementation
//! supports concurrent reads.

pub mod config;
pub mod core;
pub mod discovery;
pub mod generator;
pub mod server;

pub use crate::config::{ConfigError, load_servers};
pub use crate::core::PathPattern;
pub use crate::discovery::{Discovery, InMemoryDiscovery, MappingRule};
pub use crate::generator::{GenerateUrlError, PUBLIC_RESOURCE_CATEGORY, UrlGenerator};
pub use crate::server::{ServerTemplateError, ServerTemplates, UrlTemplate};
