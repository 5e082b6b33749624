pub mod cli;
pub mod commands;
pub mod errors;
pub mod logging;
pub mod registry;

pub use errors::RegistryError;
pub use registry::{Config, ConfigKey, ConfigValue, Project, Registry, RegistryStore};
