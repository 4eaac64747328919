//! Ordered map backed by an in-memory B-tree.
//!
//! This crate provides [`OrderedMap`], an associative container that keeps
//! its entries sorted by key in a B-tree of configurable degree, supporting
//! lookup, insert-or-replace, removal, constant-time length, and in-order
//! traversal.
//!
//! Keys only need the single ordering capability expressed by [`Key`];
//! every `Ord` type qualifies.
//!
//! The map performs no internal synchronization. Wrap it in a lock to share
//! it between threads.

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

pub use construction::{validation as degree_validation, DEFAULT_DEGREE};
pub use error::{BTreeMapError, BTreeResult, InitResult, KeyResult, ModifyResult};
pub use iteration::{ItemIterator, KeyIterator, ValueIterator};
pub use types::{Key, OrderedMap, MAX_DEGREE, MIN_DEGREE};

use std::fmt;
use tracing::debug;

impl<K, V> OrderedMap<K, V> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the degree fixed at construction.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of node levels, 0 for an empty map.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Remove all entries from the map, keeping its degree.
    pub fn clear(&mut self) {
        debug!(len = self.len, height = self.height, "clearing map");
        self.root = None;
        self.len = 0;
        self.height = 0;
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items()).finish()
    }
}
