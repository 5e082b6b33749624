//! `prj config` subcommands.

use anyhow::Result;
use std::io::Write;

use crate::errors::RegistryError;
use crate::registry::Registry;

/// Print every configuration option.
pub fn list<W: Write>(registry: &Registry, out: &mut W) -> Result<()> {
    writeln!(out, "{}", registry.config())?;
    Ok(())
}

/// Print one configuration option.
pub fn get<W: Write>(registry: &Registry, key: &str, out: &mut W) -> Result<()> {
    let value = registry
        .config_option(key)
        .ok_or_else(|| RegistryError::UnknownConfigKey(key.to_string()))?;

    writeln!(out, "{}", value)?;
    Ok(())
}

/// Set one configuration option. Unknown keys are accepted and ignored.
pub fn set(registry: &mut Registry, key: &str, value: &str) -> Result<()> {
    registry.set_config_option(key, value);
    Ok(())
}
