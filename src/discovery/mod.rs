//! Mapping Rule Source - the discovery index the generator reads from.
//!
//! The generator never owns rules; it consumes them through the narrow
//! [`Discovery`] trait, one synchronous lookup by category. Order is
//! caller-significant: the generator picks the **first** structurally
//! matching rule, so a source decides precedence purely by the order it
//! returns rules in.
//!
//! # Architecture
//!
//! ```text
//! Repository paths                Public URL space
//! ================               ================
//! /app/public/css/style.css  ->  /css/style.css        (localhost)
//! /acme/blog/js/app.js       ->  https://cdn.example.com/js/app.js
//! ```
//!
//! [`InMemoryDiscovery`] is the bundled implementation; anything else
//! (file-backed, remote index) only has to return ordered slices.

mod memory;
mod rule;

use std::sync::Arc;

pub use memory::InMemoryDiscovery;
pub use rule::{MappingRule, PATH_ATTRIBUTE, SERVER_ATTRIBUTE};

/// Lookup service for mapping rules.
///
/// Implementations must be safe for concurrent read access; the
/// generator calls this from any thread without synchronization.
pub trait Discovery: Send + Sync {
    /// All rules currently registered for a category, in precedence
    /// order. May be empty.
    fn rules_for(&self, category: &str) -> &[MappingRule];
}

impl<'a, D: Discovery + ?Sized> Discovery for &'a D {
    fn rules_for(&self, category: &str) -> &[MappingRule] {
        (**self).rules_for(category)
    }
}

impl<D: Discovery + ?Sized> Discovery for Arc<D> {
    fn rules_for(&self, category: &str) -> &[MappingRule] {
        (**self).rules_for(category)
    }
}
