//! Load-once, save-once backing for the registry in ~/.prj/db.json

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::global::Registry;

const STORAGE_DIR: &str = ".prj";
const REGISTRY_FILE: &str = "db.json";

/// Owns the registry for the lifetime of one run.
///
/// Mutations stay in memory until [`persist`](Self::persist) writes them out.
/// Dropping the store without persisting discards them and leaves the file as it was.
#[derive(Debug)]
pub struct RegistryStore {
    path: PathBuf,
    registry: Registry,
}

impl RegistryStore {
    /// Current user's home directory.
    pub fn home_dir() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
    }

    /// Storage directory under `home` (`<home>/.prj`).
    pub fn storage_dir(home: &Path) -> PathBuf {
        home.join(STORAGE_DIR)
    }

    /// Open the registry under the current user's home directory.
    pub fn open() -> Result<Self> {
        let home = Self::home_dir()?;
        Self::open_in(&Self::storage_dir(&home), &home)
    }

    /// Open the registry stored in `storage_dir`, creating the directory if needed.
    ///
    /// `home` only feeds the first-run default for `BaseDir`. An existing file that
    /// can't be read or parsed is an error; it is never replaced with defaults.
    pub fn open_in(storage_dir: &Path, home: &Path) -> Result<Self> {
        if !exists(storage_dir)? || !storage_dir.is_dir() {
            create_storage_dir(storage_dir).with_context(|| {
                format!("Failed to create storage directory {:?}", storage_dir)
            })?;
        }

        let path = storage_dir.join(REGISTRY_FILE);
        let registry = if exists(&path)? {
            let content = fs::read(&path)
                .with_context(|| format!("Failed to read registry from {:?}", path))?;

            Registry::from_json(&content).with_context(|| {
                format!("Failed to parse registry from {:?}, it may be corrupted", path)
            })?
        } else {
            debug!("No existing registry found, creating new one");
            Registry::with_home(home)
        };

        Ok(Self { path, registry })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Write the registry to disk, replacing the previous file in one rename.
    ///
    /// Consumes the store: this is the last thing a run does with it.
    pub fn persist(self) -> Result<()> {
        let content = self
            .registry
            .to_json()
            .context("Failed to serialize registry")?;

        // Write to a temporary file first, then rename for atomicity
        let temp_path = self.path.with_extension("json.tmp");

        if let Err(err) = replace_with(&temp_path, &self.path, &content) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                debug!("Could not remove {:?}: {}", temp_path, cleanup);
            }
            return Err(err);
        }

        debug!("Saved registry to {:?}", self.path);
        Ok(())
    }
}

/// Like `Path::exists`, but a failed stat is an error instead of `false`.
fn exists(path: &Path) -> Result<bool> {
    path.try_exists()
        .with_context(|| format!("Could not determine if {:?} exists", path))
}

fn replace_with(temp_path: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::create(temp_path)
        .with_context(|| format!("Failed to create temp file {:?}", temp_path))?;

    file.write_all(content)
        .context("Failed to write registry content")?;

    file.sync_all().context("Failed to sync registry file")?;
    drop(file);

    fs::rename(temp_path, path)
        .with_context(|| format!("Failed to rename temp file to {:?}", path))
}

#[cfg(unix)]
fn create_storage_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_storage_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}
