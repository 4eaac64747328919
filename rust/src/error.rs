//! Error handling and result types for OrderedMap operations.
//!
//! Lookups and removals report misses through `Option`; the error type here
//! covers construction, the checked accessors, and invariant validation.

use thiserror::Error;

/// Error type for ordered map operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BTreeMapError {
    /// Key not found in the map.
    #[error("key not found in map")]
    KeyNotFound,
    /// Invalid construction parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Tree corruption detected.
    #[error("corrupted tree: {0}")]
    CorruptedTree(String),
}

impl BTreeMapError {
    /// Create an InvalidConfiguration error for a rejected degree
    pub fn invalid_degree(degree: usize, min_required: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "degree {} is invalid (minimum required: {})",
            degree, min_required
        ))
    }

    /// Create an InvalidConfiguration error for a degree whose node capacity overflows
    pub fn degree_too_large(degree: usize, max_allowed: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "degree {} is invalid (maximum allowed: {})",
            degree, max_allowed
        ))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Check if this error reports a missing key
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }
}

/// Public result type for map operations that may fail
pub type BTreeResult<T> = Result<T, BTreeMapError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, BTreeMapError>;

/// Result type for checked modification operations
pub type ModifyResult<T> = Result<T, BTreeMapError>;

/// Result type for map construction
pub type InitResult<T> = Result<T, BTreeMapError>;
