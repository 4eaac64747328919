//! Core types and data structures for OrderedMap.
//!
//! This module contains the fundamental data structures, the key ordering
//! capability, and the constants used throughout the B-tree implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum degree for any B-tree (a 2-3-4 tree).
pub const MIN_DEGREE: usize = 2;

/// Largest degree whose node capacity `2*degree-1` fits in a `usize`.
pub const MAX_DEGREE: usize = usize::MAX / 2;

// ============================================================================
// KEY ORDERING
// ============================================================================

/// Strict ordering capability required of map keys.
///
/// `less` must be a strict weak ordering: irreflexive, asymmetric and
/// transitive, with incomparability transitive as well. Two keys are treated
/// as equal when neither is less than the other.
///
/// Every `Ord` type is a `Key` through the blanket implementation below.
/// Types that should not (or cannot) be `Ord` may implement `Key` directly.
///
/// # Examples
///
/// ```
/// use btreemap::{Key, OrderedMap};
///
/// #[derive(Debug)]
/// struct CaseInsensitive(String);
///
/// impl Key for CaseInsensitive {
///     fn less(&self, other: &Self) -> bool {
///         self.0.to_lowercase() < other.0.to_lowercase()
///     }
/// }
///
/// let mut map = OrderedMap::new(4).unwrap();
/// map.insert(CaseInsensitive("Alpha".into()), 1);
/// assert_eq!(map.insert(CaseInsensitive("ALPHA".into()), 2), Some(1));
/// assert_eq!(map.len(), 1);
/// ```
pub trait Key {
    /// Returns true if `self` orders strictly before `other`.
    fn less(&self, other: &Self) -> bool;
}

impl<T: Ord> Key for T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self < other
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Ordered map backed by an in-memory B-tree.
///
/// Every node holds at most `2*degree-1` entries and every node other than
/// the root holds at least `degree-1`. Unlike a B+ tree, entries live in
/// internal nodes as well as leaves; an in-order walk visits them in
/// ascending key order.
///
/// # Type Parameters
///
/// * `K` - Key type implementing [`Key`] (any `Ord` type does)
/// * `V` - Value type, no bounds required
///
/// # Examples
///
/// ```
/// use btreemap::OrderedMap;
///
/// let mut map = OrderedMap::new(10).unwrap();
/// assert_eq!(map.insert(1, "1"), None);
/// assert_eq!(map.insert(123, "123"), None);
/// assert_eq!(map.insert(10, "10"), None);
/// assert_eq!(map.insert(10, "100"), Some("10"));
///
/// assert_eq!(map.get(&10), Some(&"100"));
/// assert_eq!(map.get(&20), None);
/// assert_eq!(map.remove(&123), Some("123"));
/// assert_eq!(map.len(), 2);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Length**: O(1)
/// - **Iteration**: O(n)
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    /// Branching parameter fixed at construction.
    pub(crate) degree: usize,
    /// Root node, `None` while the map is empty.
    pub(crate) root: Option<Node<K, V>>,
    /// Number of entries in the map.
    pub(crate) len: usize,
    /// Number of node levels, 0 while the map is empty.
    pub(crate) height: usize,
}

/// A key-value pair stored in a node.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: Key, V> Entry<K, V> {
    /// Entries order by key alone.
    #[inline]
    pub(crate) fn key_less(&self, key: &K) -> bool {
        self.key.less(key)
    }
}

/// B-tree node. A node is a leaf exactly when it has no children.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Maximum number of entries this node can hold (`2*degree-1`).
    pub(crate) capacity: usize,
    /// Entries sorted by key.
    pub(crate) entries: Vec<Entry<K, V>>,
    /// Child subtrees, `entries.len() + 1` of them for internal nodes.
    pub(crate) children: Vec<Node<K, V>>,
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Result of an insertion into a subtree.
pub(crate) enum InsertResult<K, V> {
    /// Insertion completed without splitting. Contains the old value if the key existed.
    Updated(Option<V>),
    /// The subtree root overflowed and was split; the median and the new
    /// right sibling must be placed in the parent.
    Split { median: Entry<K, V>, right: Node<K, V> },
}
