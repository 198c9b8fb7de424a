//! Confhold - typed holder for configuration defaults and warnings
//!
//! A [`ConfigHolder`] owns a single "defaults" value of caller-chosen shape
//! and an ordered list of warning messages. The value is written wholesale
//! through a setter and read back as a detached clone, so nothing outside
//! the holder can reach its internal state. Reading before any write yields
//! the named error value [`HolderError::DefaultsNotSet`] instead of data.

pub mod error;
pub mod holder;

// Re-exports for convenience
pub use error::{HolderError, HolderResult};
pub use holder::ConfigHolder;
