use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use prj::cli::Cli;
use prj::RegistryStore;

/// A throwaway home directory with its own `.prj` storage.
pub struct TestHarness {
    pub temp_dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn storage_dir(&self) -> PathBuf {
        RegistryStore::storage_dir(self.home())
    }

    pub fn registry_file(&self) -> PathBuf {
        self.storage_dir().join("db.json")
    }

    pub fn open(&self) -> Result<RegistryStore> {
        RegistryStore::open_in(&self.storage_dir(), self.home())
    }

    /// One process run: load, dispatch `args`, persist. Returns stdout and the
    /// command's own result.
    pub fn run(&self, args: &[&str]) -> Result<(String, Result<()>)> {
        let cli = Cli::try_parse_from(std::iter::once("prj").chain(args.iter().copied()))?;
        let mut store = self.open()?;

        let mut out = Vec::new();
        let outcome = prj::commands::dispatch(&cli, store.registry_mut(), &mut out);
        store.persist()?;

        Ok((String::from_utf8(out)?, outcome))
    }

    pub fn create_dir(&self, path: &str) -> Result<PathBuf> {
        let dir = self.home().join(path);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
