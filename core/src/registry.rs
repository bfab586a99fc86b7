//! Ordered flag registry.
//!
//! The registry keeps two views of the same set of declarations: an
//! insertion-ordered key list (which fixes the help-listing order) and a
//! key-to-[`Flag`] map for O(1) lookup. Every key in the order list has
//! exactly one entry in the map and vice versa.

use std::collections::HashMap;

use crate::Flag;

/// Insertion-ordered collection of [`Flag`] declarations.
///
/// Registration performs no validation: empty keys are stored as-is and
/// re-registering a key overwrites its declaration in place, keeping the
/// key's original position in the help listing.
///
/// # Examples
///
/// ```
/// use dashdash::{Flag, FlagRegistry};
///
/// let mut registry = FlagRegistry::new();
/// registry.register(Flag::new("force").with_short("f"));
/// registry.register(Flag::new("recursive").with_short("r"));
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get("force").unwrap().short_key.as_deref(), Some("f"));
///
/// // Re-registering keeps the original position.
/// registry.register(Flag::new("force").with_description("overwrite outputs"));
/// let keys: Vec<&str> = registry.iter().map(|f| f.key.as_str()).collect();
/// assert_eq!(keys, ["force", "recursive"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    keys: Vec<String>,
    flags: HashMap<String, Flag>,
}

impl FlagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flag, overwriting any previous declaration for its key.
    pub fn register(&mut self, flag: Flag) {
        if !self.flags.contains_key(&flag.key) {
            self.keys.push(flag.key.clone());
        }
        self.flags.insert(flag.key.clone(), flag);
    }

    /// Removes a single key. No-op if the key is not registered.
    pub fn unregister(&mut self, key: &str) {
        self.keys.retain(|k| k != key);
        self.flags.remove(key);
    }

    /// Removes every registered flag.
    pub fn unregister_all(&mut self) {
        self.keys.clear();
        self.flags.clear();
    }

    /// Looks up a declaration by key.
    pub fn get(&self, key: &str) -> Option<&Flag> {
        self.flags.get(key)
    }

    /// Iterates over declarations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.keys.iter().filter_map(|key| self.flags.get(key))
    }

    /// Number of registered flags.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_preserves_insertion_order() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("c"));
        registry.register(Flag::new("a"));
        registry.register(Flag::new("b"));

        let keys: Vec<&str> = registry.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn test_reregister_overwrites_in_place() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("one").with_short("1"));
        registry.register(Flag::new("two"));
        registry.register(Flag::new("one").with_description("first"));

        assert_eq!(registry.len(), 2);
        let keys: Vec<&str> = registry.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["one", "two"]);

        let one = registry.get("one").unwrap();
        assert_eq!(one.short_key, None);
        assert_eq!(one.description.as_deref(), Some("first"));
    }

    #[test]
    fn test_unregister_removes_both_views() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("keep"));
        registry.register(Flag::new("drop"));

        registry.unregister("drop");
        assert_eq!(registry.len(), 1);
        assert!(registry.get("drop").is_none());

        // Unregistering a missing key is a no-op.
        registry.unregister("drop");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_all() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new("a"));
        registry.register(Flag::new("b"));

        registry.unregister_all();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_empty_keys_accepted() {
        let mut registry = FlagRegistry::new();
        registry.register(Flag::new(""));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("").is_some());
    }
}
