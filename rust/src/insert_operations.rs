//! INSERT operations for OrderedMap.
//!
//! This module contains the insertion path: descending to a leaf, replacing
//! existing entries in place, splitting overflowing nodes on the way back
//! up, and growing a new root when the old one splits.

use crate::error::{BTreeMapError, ModifyResult};
use crate::types::{Entry, InsertResult, Key, Node, OrderedMap};
use std::mem;
use tracing::trace;

impl<K: Key, V> OrderedMap<K, V> {
    /// Insert a key-value pair into the map.
    ///
    /// If an equal key is already present, its entry (key included) is
    /// replaced and the previous value is returned.
    ///
    /// # Returns
    ///
    /// The previous value if the key existed, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreemap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new(16).unwrap();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "ONE"), Some("one"));
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let capacity = self.node_capacity();
        let Some(root) = self.root.as_mut() else {
            let mut leaf = Node::new(capacity);
            leaf.entries.push(Entry::new(key, value));
            self.root = Some(leaf);
            self.height = 1;
            self.len = 1;
            return None;
        };

        match root.insert(key, value) {
            InsertResult::Updated(Some(old_value)) => Some(old_value),
            InsertResult::Updated(None) => {
                self.len += 1;
                None
            }
            InsertResult::Split { median, right } => {
                let left = mem::replace(root, Node::new(capacity));
                *root = Node::new_root(capacity, left, median, right);
                self.height += 1;
                self.len += 1;
                trace!(height = self.height, len = self.len, "root split, tree grew");
                None
            }
        }
    }

    /// Insert and then verify every tree invariant.
    ///
    /// Returns the same value as [`insert`](Self::insert), or a
    /// `CorruptedTree` error if the structure no longer validates; in that
    /// case the map should be discarded.
    pub fn try_insert(&mut self, key: K, value: V) -> ModifyResult<Option<V>> {
        let old_value = self.insert(key, value);
        self.check_invariants_detailed()
            .map_err(|e| BTreeMapError::corrupted_tree("Insert", &e.to_string()))?;
        Ok(old_value)
    }
}

impl<K: Key, V> Node<K, V> {
    /// Insert into this subtree, splitting this node if it overflows.
    pub(crate) fn insert(&mut self, key: K, value: V) -> InsertResult<K, V> {
        match self.search(&key) {
            Ok(index) => {
                let old = mem::replace(&mut self.entries[index], Entry::new(key, value));
                InsertResult::Updated(Some(old.value))
            }
            Err(index) if self.is_leaf() => {
                self.entries.insert(index, Entry::new(key, value));
                self.split_if_needed()
            }
            Err(index) => match self.children[index].insert(key, value) {
                InsertResult::Split { median, right } => {
                    self.entries.insert(index, median);
                    self.children.insert(index + 1, right);
                    self.split_if_needed()
                }
                updated => updated,
            },
        }
    }

    fn split_if_needed(&mut self) -> InsertResult<K, V> {
        if !self.needs_split() {
            return InsertResult::Updated(None);
        }
        let (median, right) = self.split();
        trace!(
            left = self.len(),
            right = right.len(),
            leaf = self.is_leaf(),
            "split overflowing node"
        );
        InsertResult::Split { median, right }
    }
}
