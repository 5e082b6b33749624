//! A registered project directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Metadata about a registered project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique key within the registry
    #[serde(rename = "Name")]
    pub name: String,
    /// Directory the project lives in, absolute or relative as registered
    #[serde(rename = "Path")]
    pub path: PathBuf,
}

impl Project {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a display-friendly representation of the project path.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
