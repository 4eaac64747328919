//! Construction and initialization logic for OrderedMap.
//!
//! This module contains degree validation, the constructors, and the
//! `Default`, `FromIterator` and `Extend` implementations.

use crate::error::{BTreeMapError, InitResult};
use crate::types::{Key, OrderedMap, MAX_DEGREE, MIN_DEGREE};
use tracing::debug;

/// Default degree for maps built without an explicit one.
pub const DEFAULT_DEGREE: usize = 16;

impl<K, V> OrderedMap<K, V> {
    /// Create an empty map with the given degree.
    ///
    /// # Arguments
    ///
    /// * `degree` - Branching parameter, from `MIN_DEGREE` to `MAX_DEGREE`.
    ///   Nodes hold at most `2*degree-1` entries, and every node but the root
    ///   at least `degree-1`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(OrderedMap)` if the degree is valid,
    /// `Err(BTreeMapError::InvalidConfiguration)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btreemap::OrderedMap;
    ///
    /// // A 2-3-4 tree: each node holds 1-3 entries and 2-4 children.
    /// let map = OrderedMap::<i32, String>::new(2).unwrap();
    /// assert!(map.is_empty());
    ///
    /// assert!(OrderedMap::<i32, String>::new(1).is_err());
    /// ```
    pub fn new(degree: usize) -> InitResult<Self> {
        validation::validate_degree(degree)?;
        Ok(Self::empty(degree))
    }

    /// Create an empty map with the default degree.
    ///
    /// This is equivalent to calling `new(DEFAULT_DEGREE)`.
    pub fn with_default_degree() -> Self {
        Self::empty(DEFAULT_DEGREE)
    }

    /// Empty map for an already validated degree.
    fn empty(degree: usize) -> Self {
        Self {
            degree,
            root: None,
            len: 0,
            height: 0,
        }
    }

    /// Maximum number of entries per node for this map's degree.
    pub(crate) fn node_capacity(&self) -> usize {
        2 * self.degree - 1
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    /// Create an empty map with the default degree.
    fn default() -> Self {
        Self::with_default_degree()
    }
}

impl<K: Key, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    /// Build a map with the default degree. Later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_default_degree();
        map.extend(iter);
        map
    }
}

impl<K: Key, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a degree is suitable for a B-tree.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if valid, `Err(BTreeMapError)` otherwise.
    pub fn validate_degree(degree: usize) -> InitResult<()> {
        if degree < MIN_DEGREE {
            debug!(degree, min_degree = MIN_DEGREE, "rejecting map degree");
            Err(BTreeMapError::invalid_degree(degree, MIN_DEGREE))
        } else if degree > MAX_DEGREE {
            debug!(degree, max_degree = MAX_DEGREE, "rejecting map degree");
            Err(BTreeMapError::degree_too_large(degree, MAX_DEGREE))
        } else {
            Ok(())
        }
    }

    /// Get the recommended degree for a given expected number of entries.
    ///
    /// Small maps favour shallow scans inside few nodes; large maps favour
    /// wide nodes that keep the tree short.
    ///
    /// # Returns
    ///
    /// Recommended degree (always >= MIN_DEGREE)
    pub fn recommended_degree(expected_entries: usize) -> usize {
        if expected_entries < 100 {
            4
        } else if expected_entries < 10_000 {
            DEFAULT_DEGREE
        } else if expected_entries < 1_000_000 {
            32
        } else {
            64
        }
    }
}
