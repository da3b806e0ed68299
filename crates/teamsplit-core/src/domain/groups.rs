//! Group-name set: the unique, insertion-ordered list of group names.
//!
//! Backed by a `Vec` rather than a hash set because the listing order is
//! what the UI renders: groups appear in the order they were created.

use thiserror::Error;

/// Errors raised by group-set mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupSetError {
    /// A group with this name is already registered.
    #[error("group name already registered: {0}")]
    DuplicateName(String),
}

/// The set of all group names known to the app.
///
/// A group is identified solely by its name; there are no other attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSet {
    names: Vec<String>,
}

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group name.
    ///
    /// # Errors
    ///
    /// Returns [`GroupSetError::DuplicateName`] if the name is already
    /// present.
    pub fn insert(&mut self, name: impl Into<String>) -> Result<(), GroupSetError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(GroupSetError::DuplicateName(name));
        }
        self.names.push(name);
        Ok(())
    }

    /// Removes a group name.
    ///
    /// Filtering a name that is not present is a no-op; returns `true` if
    /// anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// All group names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consumes the set, yielding the raw name list for persistence.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl From<Vec<String>> for GroupSet {
    /// Wraps a persisted name list as-is. The list is trusted to have been
    /// written through [`GroupSet::insert`].
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_empty() {
        let set = GroupSet::new();
        assert!(set.is_empty());
        assert!(set.names().is_empty());
    }

    #[test]
    fn test_insert_keeps_insertion_order() {
        let mut set = GroupSet::new();
        set.insert("friday").unwrap();
        set.insert("monday").unwrap();
        set.insert("alumni").unwrap();

        assert_eq!(set.names(), ["friday", "monday", "alumni"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_name() {
        let mut set = GroupSet::new();
        set.insert("friday").unwrap();

        let err = set.insert("friday").unwrap_err();
        assert_eq!(err, GroupSetError::DuplicateName("friday".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_filters_the_name() {
        let mut set = GroupSet::new();
        set.insert("friday").unwrap();
        set.insert("monday").unwrap();

        assert!(set.remove("friday"));
        assert_eq!(set.names(), ["monday"]);
    }

    #[test]
    fn test_remove_unknown_name_is_noop() {
        let mut set = GroupSet::new();
        set.insert("friday").unwrap();

        assert!(!set.remove("sunday"));
        assert_eq!(set.names(), ["friday"]);
    }

    #[test]
    fn test_contains_after_insert_and_remove() {
        let mut set = GroupSet::new();
        set.insert("friday").unwrap();
        assert!(set.contains("friday"));

        set.remove("friday");
        assert!(!set.contains("friday"));
    }
}
