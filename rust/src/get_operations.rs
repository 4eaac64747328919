//! GET operations for OrderedMap.
//!
//! This module contains the read operations for the B-tree: key lookup,
//! value retrieval, and access to the smallest and largest entries.

use crate::error::{BTreeMapError, KeyResult};
use crate::types::{Key, OrderedMap};

impl<K: Key, V> OrderedMap<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// Each visited node is binary-searched; on a miss inside an internal
    /// node the search descends into the child bracketing the key.
    ///
    /// # Returns
    ///
    /// A reference to the value if the key exists, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreemap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new(16).unwrap();
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut node = self.root.as_ref()?;
        loop {
            match node.search(key) {
                Ok(index) => return Some(&node.entries[index].value),
                Err(index) => node = node.children.get(index)?,
            }
        }
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreemap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new(16).unwrap();
    /// map.insert(1, "one");
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "ONE";
    /// }
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut node = self.root.as_mut()?;
        loop {
            match node.search(key) {
                Ok(index) => return Some(&mut node.entries[index].value),
                Err(index) => node = node.children.get_mut(index)?,
            }
        }
    }

    /// Check if key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Get value for a key with default.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreemap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new(16).unwrap();
    /// map.insert(1, "one");
    /// assert_eq!(map.get_or_default(&1, &""), &"one");
    /// assert_eq!(map.get_or_default(&2, &""), &"");
    /// ```
    pub fn get_or_default<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Get value for a key, returning an error if the key doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreemap::{BTreeMapError, OrderedMap};
    ///
    /// let mut map = OrderedMap::new(16).unwrap();
    /// map.insert(1, "one");
    /// assert_eq!(map.get_item(&1), Ok(&"one"));
    /// assert_eq!(map.get_item(&2), Err(BTreeMapError::KeyNotFound));
    /// ```
    pub fn get_item(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(BTreeMapError::KeyNotFound)
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root
            .as_ref()?
            .first_entry()
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root
            .as_ref()?
            .last_entry()
            .map(|entry| (&entry.key, &entry.value))
    }
}
