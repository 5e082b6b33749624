//! Recoverable registry errors.
//!
//! Storage failures (unreadable or corrupt `db.json`, unwritable storage directory)
//! are not represented here. They are fatal and travel as `anyhow::Error` out of
//! [`RegistryStore::open`](crate::registry::RegistryStore::open) and
//! [`RegistryStore::persist`](crate::registry::RegistryStore::persist).

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors a command can report to the user and carry on from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A project with this name is already registered
    #[error("project '{0}' already exists")]
    AlreadyExists(String),

    /// No project with this name is registered
    #[error("project '{0}' does not exist")]
    NotFound(String),

    /// Configuration key outside the fixed set of known keys
    #[error("unknown configuration key '{0}'")]
    UnknownConfigKey(String),
}
