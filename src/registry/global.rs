//! The in-memory registry: configuration plus every registered project.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info};

use super::config::{Config, ConfigKey, ConfigValue};
use super::project::Project;
use crate::errors::{RegistryError, Result};

const JSON_INDENT: &[u8] = b"    ";

/// Configuration and the name-keyed project map, as stored in `db.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(rename = "Config")]
    config: Config,

    /// Map of project name to project
    #[serde(
        rename = "Projects",
        default,
        serialize_with = "sorted_by_name",
        deserialize_with = "null_as_empty"
    )]
    projects: HashMap<String, Project>,
}

// Written in name order so the file doesn't churn between saves
fn sorted_by_name<S>(
    projects: &HashMap<String, Project>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    projects.iter().collect::<BTreeMap<_, _>>().serialize(serializer)
}

fn null_as_empty<'de, D>(
    deserializer: D,
) -> std::result::Result<HashMap<String, Project>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, Project>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Registry {
    /// An empty registry with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            projects: HashMap::new(),
        }
    }

    /// An empty registry with first-run defaults derived from `home`.
    pub fn with_home(home: &Path) -> Self {
        Self::new(Config::with_home(home))
    }

    /// Decode a registry from the contents of `db.json`.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Encode the registry the way `db.json` is laid out: pretty, 4-space indent.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_dir(&self) -> &Path {
        &self.config.base_dir
    }

    pub fn always_git(&self) -> bool {
        self.config.always_git
    }

    pub fn editor_in_background(&self) -> bool {
        self.config.editor_in_background
    }

    /// Value of a configuration option by its textual key, `None` for unknown keys.
    pub fn config_option(&self, key: &str) -> Option<ConfigValue> {
        key.parse::<ConfigKey>().ok().map(|key| self.config.get(key))
    }

    /// Set a configuration option from its textual key and value.
    ///
    /// Unknown keys are ignored.
    pub fn set_config_option(&mut self, key: &str, raw: &str) {
        match key.parse::<ConfigKey>() {
            Ok(key) => {
                self.config.set(key, raw);
                info!("Set {} to {}", key, self.config.get(key));
            }
            Err(_) => debug!("Ignoring unknown configuration key '{}'", key),
        }
    }

    /// Register a project under `name`.
    ///
    /// Returns `AlreadyExists` if the name is taken; the existing entry is kept.
    pub fn register_project(&mut self, name: &str, path: impl AsRef<Path>) -> Result<()> {
        if self.projects.contains_key(name) {
            return Err(RegistryError::AlreadyExists(name.to_string()));
        }

        let path = path.as_ref();
        info!("Adding project '{}' at {:?}", name, path);
        self.projects.insert(name.to_string(), Project::new(name, path));

        Ok(())
    }

    /// Path of the project registered as `name`.
    pub fn lookup_project_path(&self, name: &str) -> Result<&Path> {
        self.projects
            .get(name)
            .map(Project::path)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// All projects ordered by path, then by name.
    pub fn list_projects(&self) -> Vec<&Project> {
        let mut projects: Vec<_> = self.projects.values().collect();
        projects.sort_by(|a, b| {
            a.path
                .as_os_str()
                .cmp(b.path.as_os_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        projects
    }

    /// Remove a project from the registry by name.
    ///
    /// Removing a name that isn't registered does nothing.
    pub fn delete_project(&mut self, name: &str) -> Option<Project> {
        let removed = self.projects.remove(name);
        if removed.is_some() {
            info!("Removed project '{}' from registry", name);
        }
        removed
    }

    /// Get a project by name.
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    /// Registered names, sorted.
    pub fn project_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.projects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
