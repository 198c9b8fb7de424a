//! Error types for confhold
//!
//! Uses `thiserror` for library errors.

use thiserror::Error;

/// Result type alias for holder operations
pub type HolderResult<T> = Result<T, HolderError>;

/// Main error type for holder operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderError {
    /// Defaults were read before any value was stored
    #[error("defaults accessed while unset")]
    DefaultsNotSet,
}
