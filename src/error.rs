//! Error types for namecache
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CacheError
pub type Result<T> = std::result::Result<T, CacheError>;

/// Unified error type for namecache operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    // -------------------------------------------------------------------------
    // Key Validation Errors
    // -------------------------------------------------------------------------
    #[error("invalid name: {0}")]
    InvalidName(String),

    // -------------------------------------------------------------------------
    // Resource Errors
    // -------------------------------------------------------------------------
    #[error("table full: capacity limit of {limit} entries reached")]
    CapacityExhausted { limit: usize },
}
