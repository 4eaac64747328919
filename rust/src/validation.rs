//! Validation and debugging utilities for OrderedMap.
//!
//! This module contains the invariant checker: uniform leaf depth, per-node
//! occupancy bounds, strict key order inside and across nodes, child
//! counts, and agreement of the cached length and height with the tree.

use crate::error::{BTreeMapError, BTreeResult};
use crate::types::{Key, Node, OrderedMap};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Key, V> OrderedMap<K, V> {
    /// Check if the tree maintains all B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        let Some(root) = self.root.as_ref() else {
            if self.len != 0 || self.height != 0 {
                return Err(BTreeMapError::corrupted_tree(
                    "Empty tree",
                    &format!("len {} and height {} without a root", self.len, self.height),
                ));
            }
            return Ok(());
        };

        if root.is_empty() {
            return Err(BTreeMapError::corrupted_tree("Root", "root holds no entries"));
        }
        if root.capacity != self.node_capacity() {
            return Err(BTreeMapError::corrupted_tree(
                "Root",
                &format!("capacity {} for degree {}", root.capacity, self.degree),
            ));
        }

        let mut stats = NodeStats::default();
        self.check_node(root, None, None, true, 1, &mut stats)?;

        if stats.entries != self.len {
            return Err(BTreeMapError::corrupted_tree(
                "Length",
                &format!("tree holds {} entries but len is {}", stats.entries, self.len),
            ));
        }
        if stats.leaf_depth != Some(self.height) {
            return Err(BTreeMapError::corrupted_tree(
                "Height",
                &format!("leaves at depth {:?} but height is {}", stats.leaf_depth, self.height),
            ));
        }
        Ok(())
    }

    /// Recursively check invariants for a node and its children.
    ///
    /// `lower` and `upper` are the separator keys bracketing this subtree.
    fn check_node(
        &self,
        node: &Node<K, V>,
        lower: Option<&K>,
        upper: Option<&K>,
        is_root: bool,
        depth: usize,
        stats: &mut NodeStats,
    ) -> BTreeResult<()> {
        if node.capacity != self.node_capacity() {
            return Err(BTreeMapError::corrupted_tree(
                "Node",
                &format!("capacity {} at depth {}", node.capacity, depth),
            ));
        }
        if node.len() > node.capacity {
            return Err(BTreeMapError::corrupted_tree(
                "Occupancy",
                &format!(
                    "{} entries exceed capacity {} at depth {}",
                    node.len(),
                    node.capacity,
                    depth
                ),
            ));
        }
        if !is_root && node.is_underfull() {
            return Err(BTreeMapError::corrupted_tree(
                "Occupancy",
                &format!(
                    "{} entries below minimum {} at depth {}",
                    node.len(),
                    node.min_keys(),
                    depth
                ),
            ));
        }

        for pair in node.entries.windows(2) {
            if !pair[0].key_less(&pair[1].key) {
                return Err(BTreeMapError::corrupted_tree(
                    "Key order",
                    &format!("entries not strictly ascending at depth {}", depth),
                ));
            }
        }
        if let (Some(lower), Some(first)) = (lower, node.entries.first()) {
            if !lower.less(&first.key) {
                return Err(BTreeMapError::corrupted_tree(
                    "Key order",
                    &format!("first key not above its separator at depth {}", depth),
                ));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.entries.last()) {
            if !last.key.less(upper) {
                return Err(BTreeMapError::corrupted_tree(
                    "Key order",
                    &format!("last key not below its separator at depth {}", depth),
                ));
            }
        }

        stats.entries += node.len();

        if node.is_leaf() {
            return match stats.leaf_depth {
                None => {
                    stats.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(BTreeMapError::corrupted_tree(
                    "Leaf depth",
                    &format!("leaves found at depths {} and {}", expected, depth),
                )),
            };
        }

        if node.children.len() != node.len() + 1 {
            return Err(BTreeMapError::corrupted_tree(
                "Children",
                &format!(
                    "{} children for {} entries at depth {}",
                    node.children.len(),
                    node.len(),
                    depth
                ),
            ));
        }

        for (index, child) in node.children.iter().enumerate() {
            let child_lower = if index == 0 {
                lower
            } else {
                Some(&node.entries[index - 1].key)
            };
            let child_upper = node.entries.get(index).map(|entry| &entry.key).or(upper);
            self.check_node(child, child_lower, child_upper, false, depth + 1, stats)?;
        }
        Ok(())
    }
}

/// Totals gathered while walking the tree.
#[derive(Default)]
struct NodeStats {
    entries: usize,
    leaf_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;

    /// degree 2 holding 10, 20, 30, 40: root [30] over leaves [10, 20] and [40]
    fn sample() -> OrderedMap<i32, i32> {
        let mut map = OrderedMap::new(2).unwrap();
        for i in 1..=4 {
            map.insert(i * 10, i);
        }
        map
    }

    fn leaf(capacity: usize, key: i32) -> Node<i32, i32> {
        let mut node = Node::new(capacity);
        node.entries.push(Entry::new(key, 0));
        node
    }

    #[test]
    fn test_valid_trees_pass() {
        assert!(OrderedMap::<i32, i32>::new(2).unwrap().check_invariants());
        let map = sample();
        assert_eq!(map.height(), 2);
        assert_eq!(map.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_detects_len_mismatch() {
        let mut map = sample();
        map.len += 1;
        let err = map.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Length"));
    }

    #[test]
    fn test_detects_stale_height() {
        let mut map = sample();
        map.height += 1;
        let err = map.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Height"));
    }

    #[test]
    fn test_detects_unordered_keys() {
        let mut map = sample();
        map.root.as_mut().unwrap().entries[0].key = 1_000;
        let err = map.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Key order"));
    }

    #[test]
    fn test_detects_underfull_node() {
        let mut map = sample();
        map.root.as_mut().unwrap().children[1].entries.clear();
        map.len -= 1;
        let err = map.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Occupancy"));
    }

    #[test]
    fn test_detects_uneven_leaf_depth() {
        let mut map = sample();
        let root = map.root.as_mut().unwrap();
        let capacity = root.capacity;
        root.children[1].children = vec![leaf(capacity, 35), leaf(capacity, 45)];
        let err = map.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Leaf depth"));
    }

    #[test]
    fn test_detects_missing_child() {
        let mut map = sample();
        let root = map.root.as_mut().unwrap();
        root.entries.push(Entry::new(50, 5));
        let err = map.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Children"));
    }
}
