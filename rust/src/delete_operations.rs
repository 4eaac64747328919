//! DELETE operations for OrderedMap.
//!
//! This module contains the removal path: removing entries from leaves,
//! replacing internal entries with their in-order predecessor, repairing
//! underfull children by borrowing or merging, and collapsing the root
//! when it runs out of entries.

use crate::error::{BTreeMapError, ModifyResult};
use crate::types::{Entry, Key, Node, OrderedMap};
use std::mem;
use tracing::trace;

impl<K: Key, V> OrderedMap<K, V> {
    /// Remove a key from the map, returning its value.
    ///
    /// A miss leaves the map untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreemap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new(16).unwrap();
    /// map.insert(1, "one");
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.root.as_mut()?.remove(key)?;
        self.after_removal();
        Some(value)
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let entry = self.root.as_mut()?.pop_first()?;
        self.after_removal();
        Some((entry.key, entry.value))
    }

    /// Remove and return the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let entry = self.root.as_mut()?.pop_last()?;
        self.after_removal();
        Some((entry.key, entry.value))
    }

    /// Remove and then verify every tree invariant.
    ///
    /// Reports `KeyNotFound` on a miss and `CorruptedTree` if the structure
    /// no longer validates; in the latter case the map should be discarded.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<V> {
        let value = self.remove(key).ok_or(BTreeMapError::KeyNotFound)?;
        self.check_invariants_detailed()
            .map_err(|e| BTreeMapError::corrupted_tree("Remove", &e.to_string()))?;
        Ok(value)
    }

    /// Bookkeeping after an entry left the tree.
    fn after_removal(&mut self) {
        self.len -= 1;
        self.collapse_root_if_needed();
    }

    /// Shrink the tree when the root has no entries left.
    fn collapse_root_if_needed(&mut self) {
        let Some(root) = self.root.as_mut() else {
            return;
        };
        if !root.is_empty() {
            return;
        }

        // an empty internal root has exactly one child left after a merge
        match root.children.pop() {
            Some(child) => {
                *root = child;
                self.height -= 1;
                trace!(height = self.height, "root collapsed, tree shrank");
            }
            None => {
                self.root = None;
                self.height = 0;
            }
        }
    }
}

impl<K: Key, V> Node<K, V> {
    /// Remove a key from this subtree.
    ///
    /// On return every child of this node is back within occupancy bounds;
    /// this node itself may be underfull and is repaired by its parent.
    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        match self.search(key) {
            Ok(index) if self.is_leaf() => Some(self.entries.remove(index).value),
            Ok(index) => {
                let predecessor = self.children[index].pop_last()?;
                let removed = mem::replace(&mut self.entries[index], predecessor);
                self.rebalance_child(index);
                Some(removed.value)
            }
            Err(_) if self.is_leaf() => None,
            Err(index) => {
                let value = self.children[index].remove(key)?;
                self.rebalance_child(index);
                Some(value)
            }
        }
    }

    /// Remove the smallest entry of this subtree.
    pub(crate) fn pop_first(&mut self) -> Option<Entry<K, V>> {
        if self.is_leaf() {
            if self.entries.is_empty() {
                return None;
            }
            return Some(self.entries.remove(0));
        }
        let entry = self.children[0].pop_first()?;
        self.rebalance_child(0);
        Some(entry)
    }

    /// Remove the largest entry of this subtree.
    pub(crate) fn pop_last(&mut self) -> Option<Entry<K, V>> {
        if self.is_leaf() {
            return self.entries.pop();
        }
        let last = self.children.len() - 1;
        let entry = self.children[last].pop_last()?;
        self.rebalance_child(last);
        Some(entry)
    }

    // ============================================================================
    // REBALANCING
    // ============================================================================

    /// Restore minimum occupancy of the child at `index`.
    ///
    /// Tries a rotation from the left sibling, then from the right sibling,
    /// and merges with a sibling when neither can spare an entry.
    fn rebalance_child(&mut self, index: usize) {
        if !self.children[index].is_underfull() {
            return;
        }

        if index > 0 && self.children[index - 1].can_donate() {
            self.rotate_from_left(index);
        } else if index + 1 < self.children.len() && self.children[index + 1].can_donate() {
            self.rotate_from_right(index);
        } else if index > 0 {
            self.merge_children(index - 1);
        } else {
            self.merge_children(index);
        }
    }

    /// Move the left sibling's last entry up and the separator down into the child at `index`.
    fn rotate_from_left(&mut self, index: usize) {
        let (before, after) = self.children.split_at_mut(index);
        let (left, child) = (&mut before[index - 1], &mut after[0]);
        if let Some((entry, moved_child)) = left.borrow_last() {
            let separator = mem::replace(&mut self.entries[index - 1], entry);
            child.accept_from_left(separator, moved_child);
            trace!(child = index, "borrowed entry from left sibling");
        }
    }

    /// Move the right sibling's first entry up and the separator down into the child at `index`.
    fn rotate_from_right(&mut self, index: usize) {
        let (before, after) = self.children.split_at_mut(index + 1);
        let (child, right) = (&mut before[index], &mut after[0]);
        if let Some((entry, moved_child)) = right.borrow_first() {
            let separator = mem::replace(&mut self.entries[index], entry);
            child.accept_from_right(separator, moved_child);
            trace!(child = index, "borrowed entry from right sibling");
        }
    }

    /// Merge the children at `index` and `index + 1`, pulling down their separator.
    fn merge_children(&mut self, index: usize) {
        let separator = self.entries.remove(index);
        let right = self.children.remove(index + 1);
        let left = &mut self.children[index];
        left.merge_from(separator, right);
        trace!(child = index, merged_len = left.len(), "merged sibling nodes");
    }
}
