//! Error type for shop construction.
//!
//! Updating items never fails. Only building a `Rulebook` (validating its
//! configuration or registering item names) can be rejected.

use thiserror::Error;

/// Result type used by construction-time APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Construction-time error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `ShopConfig` value is inconsistent (e.g. `min > max`).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An item name was registered twice in a `CategoryRegistry`.
    #[error("item name already registered: {0:?}")]
    DuplicateName(String),
}

impl Error {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }
}
