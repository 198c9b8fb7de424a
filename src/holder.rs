//! The configuration holder
//!
//! `ConfigHolder` owns a single "defaults" value and an ordered list of
//! warning messages, exposing the value through an accessor pair rather
//! than as a raw field.

use serde::{Deserialize, Serialize};

use crate::error::{HolderError, HolderResult};

/// Holder for a defaults value and accumulated warning messages.
///
/// The held value has whatever shape the caller chooses. It is written
/// wholesale through [`set_defaults`] and read back as a detached clone
/// through [`defaults`], so callers can never mutate internal state through
/// a returned value. Once set, the value can only be replaced - there is no
/// way back to the unset state.
///
/// Warnings are an ordered, append-only sequence of strings. The holder
/// attaches no meaning to them beyond keeping them in push order.
///
/// # Example
/// ```
/// use confhold::{ConfigHolder, HolderError};
///
/// let mut holder = ConfigHolder::new();
/// assert_eq!(holder.defaults(), Err(HolderError::DefaultsNotSet));
///
/// holder.set_defaults(vec!["strict".to_string()]);
/// assert_eq!(holder.defaults().unwrap(), vec!["strict".to_string()]);
/// ```
///
/// [`set_defaults`]: ConfigHolder::set_defaults
/// [`defaults`]: ConfigHolder::defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigHolder<T> {
    /// Warning messages, in push order
    #[serde(default)]
    warnings: Vec<String>,

    /// The held value; `None` until the first `set_defaults` call
    #[serde(default)]
    defaults: Option<T>,
}

impl<T> ConfigHolder<T> {
    /// Create a holder with no warnings and no defaults.
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            defaults: None,
        }
    }

    /// Clone of the stored defaults.
    ///
    /// Cloning duplicates the owned value in full, which detaches the
    /// caller from internal state: mutating the returned value never
    /// changes what a later call returns.
    ///
    /// Returns [`HolderError::DefaultsNotSet`] if nothing has been stored
    /// yet. The condition is handed back as an ordinary value - reading an
    /// unset holder never panics.
    pub fn defaults(&self) -> HolderResult<T>
    where
        T: Clone,
    {
        self.defaults.clone().ok_or(HolderError::DefaultsNotSet)
    }

    /// Store `value` as the new defaults, replacing any previous value.
    ///
    /// Unconditional: the value is accepted as-is, with no validation of
    /// shape or content. A previously stored value is discarded without
    /// trace.
    pub fn set_defaults(&mut self, value: T) {
        self.defaults = Some(value);
    }

    /// Whether a defaults value has been stored.
    pub fn has_defaults(&self) -> bool {
        self.defaults.is_some()
    }

    /// Warning messages in the order they were pushed.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Append one warning message.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

// Not derived: a derived impl would require `T: Default`.
impl<T> Default for ConfigHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}
