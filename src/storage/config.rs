//! Configuration handling for Poet
//!
//! Configuration is read from `~/.config/poet/config.toml` (global) and then
//! `poet.toml` (project, or the file given with `--config`). Project values
//! override global ones key by key.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ClassSettings, Language, ProjectShape};

/// Project configuration file name
pub const CONFIG_FILE: &str = "poet.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Naming and language of the generated project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectSection {
    pub name: String,

    /// Package prefix for every generated class
    pub package_prefix: String,

    pub language: Language,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: "PoetProject".to_string(),
            package_prefix: "com.poet".to_string(),
            language: Language::Kotlin,
        }
    }
}

/// What gets written besides sources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSection {
    /// Render the dependency matrix image
    pub render_image: bool,

    /// File name of the matrix image, relative to the project root
    pub image_name: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            render_image: true,
            image_name: "dependencies.png".to_string(),
        }
    }
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub project: ProjectSection,
    pub shape: ProjectShape,
    pub output: OutputSection,
}

/// Recursively overlays `overlay` onto `base`
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    content
        .parse::<toml::Table>()
        .map_err(|e| ConfigError::Parse(e.to_string()))
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

impl Config {
    /// Loads configuration from the default locations
    ///
    /// An explicit path must exist; the default `poet.toml` is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let global = Self::global_config_dir()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.is_file());

        let project = match explicit {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => Some(PathBuf::from(CONFIG_FILE)).filter(|path| path.is_file()),
        };

        Self::load_layers(global.as_deref(), project.as_deref())
    }

    /// Loads and merges the given layers, later layers winning
    pub fn load_layers(global: Option<&Path>, project: Option<&Path>) -> Result<Self> {
        let mut merged = toml::Table::new();

        for path in [global, project].into_iter().flatten() {
            tracing::debug!(path = %path.display(), "loading config layer");
            merge_tables(&mut merged, read_table(path)?);
        }

        toml::Value::Table(merged)
            .try_into::<Config>()
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse merged config")
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "poet", "poet").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Checks the values needed to generate sources
    ///
    /// Every generated class exposes an entry point, so classes need at
    /// least one method and modules at least one class.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project.name.trim().is_empty() {
            return Err(ConfigError::Invalid("project name is empty".to_string()));
        }

        let valid_package = self.project.package_prefix.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
        if !valid_package {
            return Err(ConfigError::Invalid(format!(
                "package prefix '{}' is not a valid package name",
                self.project.package_prefix
            )));
        }

        if self.shape.methods_per_class == 0 {
            return Err(ConfigError::Invalid(
                "methods_per_class must be at least 1".to_string(),
            ));
        }

        if self.shape.classes_per_module == 0 {
            return Err(ConfigError::Invalid(
                "classes_per_module must be at least 1".to_string(),
            ));
        }

        if self.output.image_name.trim().is_empty() {
            return Err(ConfigError::Invalid("image_name is empty".to_string()));
        }

        Ok(())
    }

    /// Settings for building module classes
    pub fn class_settings(&self) -> ClassSettings {
        ClassSettings {
            language: self.project.language,
            package_prefix: self.project.package_prefix.clone(),
            classes_per_module: self.shape.classes_per_module,
            methods_per_class: self.shape.methods_per_class,
        }
    }

    /// Serializes the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
