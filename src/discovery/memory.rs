//! In-memory rule store.

use rustc_hash::FxHashMap;

use super::{Discovery, MappingRule};

/// Rule store keeping rules per category, in registration order.
///
/// This is the reference [`Discovery`] implementation and the natural
/// test double: register canned rules, hand the store to the generator.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDiscovery {
    rules: FxHashMap<String, Vec<MappingRule>>,
}

impl InMemoryDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under its category. Registration order is the
    /// lookup order.
    pub fn register(&mut self, rule: MappingRule) {
        self.rules
            .entry(rule.category().to_owned())
            .or_default()
            .push(rule);
    }

    /// Total number of registered rules across all categories.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.values().all(Vec::is_empty)
    }
}

impl Discovery for InMemoryDiscovery {
    fn rules_for(&self, category: &str) -> &[MappingRule] {
        self.rules.get(category).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_preserved() {
        let mut discovery = InMemoryDiscovery::new();
        discovery.register(MappingRule::new("/a", "cat"));
        discovery.register(MappingRule::new("/b", "cat"));
        discovery.register(MappingRule::new("/c", "cat"));

        let bases: Vec<&str> = discovery
            .rules_for("cat")
            .iter()
            .map(|rule| rule.pattern().base())
            .collect();
        assert_eq!(bases, ["/a", "/b", "/c"]);
    }

    #[test]
    fn test_categories_are_isolated() {
        let mut discovery = InMemoryDiscovery::new();
        discovery.register(MappingRule::new("/a", "one"));
        discovery.register(MappingRule::new("/b", "two"));

        assert_eq!(discovery.rules_for("one").len(), 1);
        assert_eq!(discovery.rules_for("two").len(), 1);
        assert_eq!(discovery.len(), 2);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let discovery = InMemoryDiscovery::new();
        assert!(discovery.rules_for("missing").is_empty());
        assert!(discovery.is_empty());
    }
}
