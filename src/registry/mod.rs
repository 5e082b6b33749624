//! Project registry module.
//!
//! Keeps track of named project directories and a handful of user defaults
//! in a single JSON file under the user's home directory.
//!
//! # Lifecycle
//!
//! A run opens the store once, mutates the [`Registry`] in memory and calls
//! [`RegistryStore::persist`] once on the way out. Nothing is written in between,
//! so a run that dies early leaves the previous file untouched.
//!
//! # Storage Location
//!
//! `~/.prj/db.json` on every platform.

mod config;
mod global;
mod project;
mod store;

pub use config::{Config, ConfigKey, ConfigValue};
pub use global::Registry;
pub use project::Project;
pub use store::RegistryStore;
