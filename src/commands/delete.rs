//! `prj delete`: unregister a project, optionally removing its directory.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use tracing::warn;

use crate::registry::Registry;

/// Remove `name` from the registry. With `remove_dir` the directory goes too.
///
/// A directory that can't be removed is reported, but the entry is still dropped.
pub fn run<W: Write>(
    registry: &mut Registry,
    name: &str,
    remove_dir: bool,
    out: &mut W,
) -> Result<()> {
    let path = registry
        .lookup_project_path(name)
        .context("could not delete project")?
        .to_path_buf();

    if remove_dir {
        writeln!(out, "Removing directory: {}", path.display())?;
        if let Err(err) = fs::remove_dir_all(&path) {
            warn!("Failed to remove {:?}: {}", path, err);
            writeln!(out, "failed to remove project directory: {}", err)?;
        }
    } else {
        writeln!(out, "Leaving directory in place")?;
    }

    registry.delete_project(name);
    writeln!(out, "Project: '{}' deleted", name)?;

    Ok(())
}
