//! Iterator implementations for OrderedMap.
//!
//! This module contains the in-order iterators over the B-tree and the
//! short-circuiting `for_each` traversal built on top of them.

use crate::types::{Node, OrderedMap};
use std::iter::FusedIterator;

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over key-value pairs.
///
/// Keeps one `(node, next entry index)` frame per level on the path from the
/// root to the current position.
#[derive(Clone)]
pub struct ItemIterator<'a, K, V> {
    stack: Vec<(&'a Node<K, V>, usize)>,
    remaining: usize,
}

/// Iterator over keys in ascending order.
#[derive(Clone)]
pub struct KeyIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

/// Iterator over values in key order.
#[derive(Clone)]
pub struct ValueIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

// ============================================================================
// ORDEREDMAP ITERATOR METHODS
// ============================================================================

impl<K, V> OrderedMap<K, V> {
    /// Returns an iterator over all key-value pairs in ascending key order.
    pub fn items(&self) -> ItemIterator<'_, K, V> {
        ItemIterator::new(self)
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> KeyIterator<'_, K, V> {
        KeyIterator::new(self)
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> ValueIterator<'_, K, V> {
        ValueIterator::new(self)
    }

    /// Visit every entry in ascending key order until `visitor` returns false.
    ///
    /// The map is borrowed for the whole traversal, so the visitor cannot
    /// modify it.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreemap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new(2).unwrap();
    /// for i in 0..10 {
    ///     map.insert(i, i * i);
    /// }
    ///
    /// let mut seen = Vec::new();
    /// map.for_each(|key, value| {
    ///     seen.push((*key, *value));
    ///     *key < 3
    /// });
    /// assert_eq!(seen, vec![(0, 0), (1, 1), (2, 4), (3, 9)]);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for (key, value) in self.items() {
            if !visitor(key, value) {
                break;
            }
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ItemIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

// ============================================================================
// ITEMITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, K, V> ItemIterator<'a, K, V> {
    pub fn new(map: &'a OrderedMap<K, V>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(map.height),
            remaining: map.len,
        };
        if let Some(root) = map.root.as_ref() {
            iter.descend_leftmost(root);
        }
        iter
    }

    /// Push `node` and its leftmost descendants down to a leaf.
    fn descend_leftmost(&mut self, mut node: &'a Node<K, V>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<'a, K, V> Iterator for ItemIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            let node: &'a Node<K, V> = top.0;
            let index = top.1;

            if index < node.entries.len() {
                top.1 += 1;
                // the subtree right of this entry comes next
                if let Some(child) = node.children.get(index + 1) {
                    self.descend_leftmost(child);
                }
                self.remaining -= 1;
                let entry = &node.entries[index];
                return Some((&entry.key, &entry.value));
            }

            self.stack.pop();
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for ItemIterator<'_, K, V> {}

impl<K, V> FusedIterator for ItemIterator<'_, K, V> {}

// ============================================================================
// KEY AND VALUE ITERATORS
// ============================================================================

impl<'a, K, V> KeyIterator<'a, K, V> {
    pub fn new(map: &'a OrderedMap<K, V>) -> Self {
        Self {
            items: ItemIterator::new(map),
        }
    }
}

impl<'a, K, V> Iterator for KeyIterator<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V> ExactSizeIterator for KeyIterator<'_, K, V> {}

impl<K, V> FusedIterator for KeyIterator<'_, K, V> {}

impl<'a, K, V> ValueIterator<'a, K, V> {
    pub fn new(map: &'a OrderedMap<K, V>) -> Self {
        Self {
            items: ItemIterator::new(map),
        }
    }
}

impl<'a, K, V> Iterator for ValueIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValueIterator<'_, K, V> {}

impl<K, V> FusedIterator for ValueIterator<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(degree: usize, n: i32) -> OrderedMap<i32, String> {
        let mut map = OrderedMap::new(degree).unwrap();
        // interleave so entries land out of insertion order
        for i in (0..n).filter(|i| i % 2 == 1).chain((0..n).filter(|i| i % 2 == 0)) {
            map.insert(i, format!("value{}", i));
        }
        map
    }

    #[test]
    fn test_items_in_order() {
        let map = sample(2, 100);
        let keys: Vec<i32> = map.items().map(|(k, _)| *k).collect();
        assert_eq!(keys, (0..100).collect::<Vec<_>>());
        assert!(map.items().all(|(k, v)| *v == format!("value{}", k)));
    }

    #[test]
    fn test_exact_size() {
        let map = sample(3, 57);
        let mut iter = map.items();
        assert_eq!(iter.len(), 57);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 55);
        assert_eq!(map.keys().len(), 57);
        assert_eq!(map.values().len(), 57);
    }

    #[test]
    fn test_empty_map_iterates_nothing() {
        let map = OrderedMap::<i32, i32>::new(2).unwrap();
        assert_eq!(map.items().next(), None);
        let mut visits = 0;
        map.for_each(|_, _| {
            visits += 1;
            true
        });
        assert_eq!(visits, 0);
    }

    #[test]
    fn test_iterator_is_fused() {
        let map = sample(2, 3);
        let mut iter = map.items();
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_for_each_short_circuits() {
        let map = sample(2, 40);
        for stop_at in [1usize, 2, 17, 40] {
            let mut visits = 0;
            map.for_each(|_, _| {
                visits += 1;
                visits < stop_at
            });
            assert_eq!(visits, stop_at);
        }
    }

    #[test]
    fn test_for_each_count_matches_len() {
        let map = sample(4, 333);
        let mut count = 0;
        map.for_each(|_, _| {
            count += 1;
            true
        });
        assert_eq!(count, map.len());
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let map = sample(2, 5);
        let mut keys = Vec::new();
        for (key, _) in &map {
            keys.push(*key);
        }
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_values_follow_key_order() {
        let map = sample(2, 4);
        let values: Vec<&String> = map.values().collect();
        assert_eq!(values, ["value0", "value1", "value2", "value3"]);
    }
}
