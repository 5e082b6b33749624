//! User-adjustable defaults stored alongside the projects in `db.json`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::RegistryError;

const DEFAULT_PROJECTS_DIR: &str = "Projects";

/// Registry-wide configuration.
///
/// Field names on disk keep the capitalised form of the legacy `db.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default parent directory for new projects
    #[serde(rename = "BaseDir")]
    pub base_dir: PathBuf,

    /// Run `git init` in every new project
    #[serde(rename = "AlwaysGit")]
    pub always_git: bool,

    /// Suffix the editor command printed by `goto --editor` with `&`
    #[serde(rename = "EditorInBackground", default)]
    pub editor_in_background: bool,
}

impl Config {
    /// Defaults used on first run: projects go under `<home>/Projects`.
    pub fn with_home(home: &Path) -> Self {
        Self {
            base_dir: home.join(DEFAULT_PROJECTS_DIR),
            always_git: false,
            editor_in_background: false,
        }
    }

    /// Current value of `key`.
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::BaseDir => ConfigValue::Path(self.base_dir.clone()),
            ConfigKey::AlwaysGit => ConfigValue::Flag(self.always_git),
            ConfigKey::EditorInBackground => ConfigValue::Flag(self.editor_in_background),
        }
    }

    /// Overwrite `key` from its textual form.
    ///
    /// Boolean keys are only true for the exact string `"true"`; any other input,
    /// including `"True"` or `"yes"`, stores false.
    pub fn set(&mut self, key: ConfigKey, raw: &str) {
        match key {
            ConfigKey::BaseDir => self.base_dir = PathBuf::from(raw),
            ConfigKey::AlwaysGit => self.always_git = parse_flag(raw),
            ConfigKey::EditorInBackground => self.editor_in_background = parse_flag(raw),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration options")?;
        writeln!(f, "Name: value")?;
        writeln!(f, "-----------")?;
        for key in ConfigKey::ALL {
            writeln!(f, "{}: {}", key, self.get(key))?;
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> bool {
    raw == "true"
}

/// The fixed set of configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    BaseDir,
    AlwaysGit,
    EditorInBackground,
}

impl ConfigKey {
    /// Every key, in display order.
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::BaseDir,
        ConfigKey::AlwaysGit,
        ConfigKey::EditorInBackground,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::BaseDir => "BaseDir",
            ConfigKey::AlwaysGit => "AlwaysGit",
            ConfigKey::EditorInBackground => "EditorInBackground",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = RegistryError;

    /// Case-sensitive: `basedir` is not `BaseDir`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownConfigKey(s.to_string()))
    }
}

/// A configuration value as read back through [`Config::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Path(PathBuf),
    Flag(bool),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Path(path) => write!(f, "{}", path.display()),
            ConfigValue::Flag(value) => write!(f, "{}", value),
        }
    }
}
