//! `prj add`: register a directory that already exists.

use anyhow::{bail, Context, Result};
use std::env;
use std::io::Write;
use std::path::Path;

use crate::registry::Registry;

/// Register `path` (or the current directory) as `name`.
pub fn run<W: Write>(
    registry: &mut Registry,
    name: &str,
    path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().context("could not retrieve current working directory")?,
    };

    if !path.exists() {
        bail!(
            "path '{}' does not exist, use 'prj new' to create a new project",
            path.display()
        );
    }
    if !path.is_dir() {
        bail!("path '{}' is not a directory", path.display());
    }

    // Canonicalize the path so `goto` works from anywhere
    let path = path.canonicalize().unwrap_or(path);

    registry
        .register_project(name, &path)
        .context("could not add project")?;

    writeln!(out, "Added project '{}' at {}", name, path.display())?;
    Ok(())
}
