//! `prj new`: create a project directory and register it.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

use crate::registry::Registry;

/// Arguments to [`run`].
#[derive(Debug, Clone, Copy)]
pub struct NewOptions<'a> {
    /// Directory name of the project
    pub name: &'a str,
    /// Levels between the base directory and the project directory
    pub categories: &'a [String],
    /// Create a git repository even when `AlwaysGit` is off
    pub git: bool,
    /// Registry name, when it should differ from the directory name
    pub register_as: Option<&'a str>,
    /// Base directory override for this invocation
    pub basedir: Option<&'a Path>,
}

impl NewOptions<'_> {
    fn project_name(&self) -> &str {
        self.register_as.unwrap_or(self.name)
    }
}

/// Create `<base>/<categories...>/<name>` and register it.
///
/// The directory must not exist yet. If it can't be created the registration
/// is undone, so the registry never points at a directory this command failed
/// to make.
pub fn run<W: Write>(
    registry: &mut Registry,
    options: &NewOptions<'_>,
    out: &mut W,
) -> Result<()> {
    let base = options
        .basedir
        .unwrap_or_else(|| registry.base_dir())
        .to_path_buf();

    if !base.is_dir() {
        fs::create_dir_all(&base)
            .with_context(|| format!("could not find or create base dir {}", base.display()))?;
    }

    let final_path = project_path(&base, options.categories, options.name)?;
    if final_path.exists() {
        bail!("path {} exists", final_path.display());
    }

    let project_name = options.project_name();
    registry.register_project(project_name, &final_path)?;

    if let Err(err) = fs::create_dir_all(&final_path) {
        registry.delete_project(project_name);
        return Err(err).with_context(|| {
            format!("could not create project directory {}", final_path.display())
        });
    }
    info!("Created project directory {:?}", final_path);

    if options.git || registry.always_git() {
        match git_init(&final_path) {
            Ok(()) => writeln!(out, "Created Git repository")?,
            Err(err) => {
                warn!("git init failed in {:?}: {:#}", final_path, err);
                writeln!(out, "Failed to create git repository. Error {:#}", err)?;
            }
        }
    }

    writeln!(out, "Created project")?;
    Ok(())
}

/// Join the base directory, each category and the project name.
///
/// Every part must stay below `base`: absolute parts and `..` are rejected.
pub fn project_path(base: &Path, categories: &[String], name: &str) -> Result<PathBuf> {
    let mut path = base.to_path_buf();

    for part in categories.iter().map(String::as_str).chain([name]) {
        let below_base = Path::new(part)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if part.is_empty() || !below_base {
            bail!("'{}' must be a relative path inside the base directory", part);
        }
        path.push(part);
    }

    Ok(path)
}

fn git_init(dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("init")
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .context("Failed to execute git")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git init failed: {}", stderr.trim());
    }

    Ok(())
}
