//! `prj list` and the hidden `prj names` used by shell completion.

use anyhow::Result;
use std::io::Write;

use crate::registry::Registry;

/// Print every project as `name: path`, ordered by path.
///
/// Ends with a blank line, like `config list`.
pub fn run<W: Write>(registry: &Registry, out: &mut W) -> Result<()> {
    writeln!(out, "Projects")?;
    writeln!(out, "--------")?;

    for project in registry.list_projects() {
        writeln!(out, "{}: {}", project.name, project.display_path())?;
    }
    writeln!(out)?;

    Ok(())
}

/// Print registered names, one per line.
pub fn names<W: Write>(registry: &Registry, out: &mut W) -> Result<()> {
    for name in registry.project_names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
