//! Hash set with unique-element semantics over [`OpenHashMap`].

use std::borrow::Borrow;
use std::hash::Hash;

use crate::collections::open_map::{Keys, OpenHashMap};

/// A hash set backed by [`OpenHashMap`] with a unit sentinel value.
///
/// Inherits the map's open addressing, quadratic probing, tombstone
/// deletion, and collision accounting. No invariants of its own.
///
/// # Examples
///
/// ```
/// use orthus::collections::OpenHashSet;
///
/// let mut set = OpenHashSet::new();
/// set.insert("cat".to_string());
/// assert!(set.contains("cat"));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct OpenHashSet<E> {
    map: OpenHashMap<E, ()>,
}

impl<E: Hash + Eq> Default for OpenHashSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Hash + Eq> OpenHashSet<E> {
    /// Create an empty set with the default initial capacity.
    pub fn new() -> Self {
        OpenHashSet {
            map: OpenHashMap::new(),
        }
    }

    /// Create an empty set whose table capacity is the smallest prime at
    /// least `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        OpenHashSet {
            map: OpenHashMap::with_capacity(capacity),
        }
    }

    /// Add an element to the set. Adding a present element is a no-op
    /// beyond the probe cost.
    pub fn insert(&mut self, element: E) {
        self.map.insert(element, ());
    }

    /// Remove an element from the set. No-op if absent.
    pub fn remove<Q>(&mut self, element: &Q)
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(element);
    }

    /// Check whether the set contains an element.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(element)
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Current table capacity of the underlying map.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Cumulative insertion probe collisions of the underlying map.
    pub fn collision_count(&self) -> u64 {
        self.map.collision_count()
    }

    /// Iterate over the elements in table-slot order.
    pub fn iter(&self) -> Keys<'_, E, ()> {
        self.map.keys()
    }
}

impl<E: Hash + Eq> Extend<E> for OpenHashSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<E: Hash + Eq> FromIterator<E> for OpenHashSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = OpenHashSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, E: Hash + Eq> IntoIterator for &'a OpenHashSet<E> {
    type Item = &'a E;
    type IntoIter = Keys<'a, E, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains_remove() {
        let mut set = OpenHashSet::new();
        assert!(set.is_empty());

        set.insert("cat".to_string());
        set.insert("dog".to_string());
        assert!(set.contains("cat"));
        assert!(set.contains("dog"));
        assert!(!set.contains("bird"));
        assert_eq!(set.len(), 2);

        set.remove("cat");
        assert!(!set.contains("cat"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let mut set = OpenHashSet::new();
        set.insert("cat");
        set.insert("cat");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_membership_unaffected_by_unrelated_mutations() {
        let mut set = OpenHashSet::new();
        set.insert("cat".to_string());
        assert!(set.contains("cat"));

        set.insert("dog".to_string());
        assert!(set.contains("cat"));

        set.remove("dog");
        assert!(set.contains("cat"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_and_from_iterator() {
        let set: OpenHashSet<String> = ["cat", "dog", "bird"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let mut elements: Vec<&String> = set.iter().collect();
        elements.sort();
        assert_eq!(elements, ["bird", "cat", "dog"]);

        let mut count = 0;
        for _ in &set {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_collision_count_delegates_to_map() {
        let mut set = OpenHashSet::new();
        for i in 0..100 {
            set.insert(format!("word{i}"));
        }
        // With 100 elements some insertions must have probed past their
        // initial slot.
        assert!(set.collision_count() > 0);
        assert_eq!(set.len(), 100);
    }
}
