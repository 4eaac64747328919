//! Node implementation for OrderedMap.
//!
//! This module contains the node-level building blocks the tree operations
//! are made of: in-node search, occupancy checks, splitting, and the
//! borrowing and merging helpers used while rebalancing.

use crate::types::{Entry, Key, Node};

impl<K, V> Node<K, V> {
    /// Creates an empty node holding at most `capacity` entries.
    ///
    /// Storage grows with the entries, so sparse nodes of a wide tree stay small.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an internal node with a single separator, used when the root splits.
    pub(crate) fn new_root(
        capacity: usize,
        left: Node<K, V>,
        median: Entry<K, V>,
        right: Node<K, V>,
    ) -> Self {
        Self {
            capacity,
            entries: vec![median],
            children: vec![left, right],
        }
    }

    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns true if this node has no children.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of entries in this node.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this node holds no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if this node overflowed and must be split.
    pub(crate) fn needs_split(&self) -> bool {
        self.entries.len() > self.capacity
    }

    /// Returns true if this node is below minimum occupancy.
    pub(crate) fn is_underfull(&self) -> bool {
        self.entries.len() < self.min_keys()
    }

    /// Returns true if this node can give an entry to a sibling.
    pub(crate) fn can_donate(&self) -> bool {
        self.entries.len() > self.min_keys()
    }

    /// Returns the minimum number of entries for a non-root node.
    pub(crate) fn min_keys(&self) -> usize {
        // capacity is 2*degree-1, so this is degree-1
        self.capacity / 2
    }

    // ============================================================================
    // EDGE ENTRIES
    // ============================================================================

    /// Smallest entry of this subtree.
    pub(crate) fn first_entry(&self) -> Option<&Entry<K, V>> {
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = child;
        }
        node.entries.first()
    }

    /// Largest entry of this subtree.
    pub(crate) fn last_entry(&self) -> Option<&Entry<K, V>> {
        let mut node = self;
        while let Some(child) = node.children.last() {
            node = child;
        }
        node.entries.last()
    }

    // ============================================================================
    // SPLITTING
    // ============================================================================

    /// Split an overflowing node in place.
    ///
    /// With `2*degree` entries the left half keeps `degree` entries, the
    /// entry at index `degree` is returned as the median to promote, and the
    /// returned right sibling takes the remaining `degree-1` entries along
    /// with the matching children.
    pub(crate) fn split(&mut self) -> (Entry<K, V>, Node<K, V>) {
        let mid = self.entries.len() / 2;

        let right_entries = self.entries.split_off(mid + 1);
        let median = self.entries.remove(mid);
        let right_children = if self.is_leaf() {
            Vec::new()
        } else {
            self.children.split_off(mid + 1)
        };

        let mut right = Node::new(self.capacity);
        right.entries.extend(right_entries);
        right.children = right_children;

        (median, right)
    }

    // ============================================================================
    // BORROWING AND MERGING HELPERS
    // ============================================================================

    /// Borrow the last entry, and the last child if internal.
    /// Used when this is the left sibling.
    pub(crate) fn borrow_last(&mut self) -> Option<(Entry<K, V>, Option<Node<K, V>>)> {
        if !self.can_donate() {
            return None;
        }
        let entry = self.entries.pop()?;
        Some((entry, self.children.pop()))
    }

    /// Borrow the first entry, and the first child if internal.
    /// Used when this is the right sibling.
    pub(crate) fn borrow_first(&mut self) -> Option<(Entry<K, V>, Option<Node<K, V>>)> {
        if !self.can_donate() {
            return None;
        }
        let entry = self.entries.remove(0);
        let child = if self.is_leaf() {
            None
        } else {
            Some(self.children.remove(0))
        };
        Some((entry, child))
    }

    /// Accept the parent's separator, and the borrowed child, at the beginning (from left sibling)
    pub(crate) fn accept_from_left(
        &mut self,
        separator: Entry<K, V>,
        moved_child: Option<Node<K, V>>,
    ) {
        self.entries.insert(0, separator);
        if let Some(child) = moved_child {
            self.children.insert(0, child);
        }
    }

    /// Accept the parent's separator, and the borrowed child, at the end (from right sibling)
    pub(crate) fn accept_from_right(
        &mut self,
        separator: Entry<K, V>,
        moved_child: Option<Node<K, V>>,
    ) {
        self.entries.push(separator);
        if let Some(child) = moved_child {
            self.children.push(child);
        }
    }

    /// Merge all content from the right sibling into this one, with separator from parent
    pub(crate) fn merge_from(&mut self, separator: Entry<K, V>, mut other: Node<K, V>) {
        self.entries.push(separator);
        self.entries.append(&mut other.entries);
        self.children.append(&mut other.children);
    }
}

impl<K: Key, V> Node<K, V> {
    /// Binary-search this node's entries.
    ///
    /// Returns `Ok(index)` when an entry with an equal key sits at `index`,
    /// otherwise `Err(index)` with the insertion point, which is also the
    /// index of the child whose subtree would hold the key.
    pub(crate) fn search(&self, key: &K) -> Result<usize, usize> {
        let index = self.entries.partition_point(|entry| entry.key_less(key));
        match self.entries.get(index) {
            Some(entry) if !key.less(&entry.key) => Ok(index),
            _ => Err(index),
        }
    }
}
