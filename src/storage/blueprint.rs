//! JSON storage for project blueprints
//!
//! The blueprint is stored as `blueprint.json` in the generated project.
//! Dependencies are kept as dependency keys on disk and decoded on load, so
//! this is the only place the key grammar meets the file format.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{KeyError, ModuleBlueprint, ModuleKind, ModuleRef, ProjectBlueprint};

/// Blueprint file name inside a generated project
pub const BLUEPRINT_FILE: &str = "blueprint.json";

#[derive(Debug, Error, PartialEq)]
pub enum BlueprintError {
    #[error("Module {module} declares malformed dependency '{key}': {source}")]
    MalformedKey {
        module: String,
        key: String,
        source: KeyError,
    },

    #[error("{kind} module at position {position} is stored with index {index}")]
    IndexMismatch {
        kind: &'static str,
        position: usize,
        index: usize,
    },

    #[error("Java module {0} cannot be a launch module")]
    JavaLaunch(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredModule {
    index: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    launch: bool,
    #[serde(default)]
    dependencies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredBlueprint {
    name: String,
    #[serde(default)]
    android_modules: Vec<StoredModule>,
    #[serde(default)]
    java_modules: Vec<StoredModule>,
}

impl StoredModule {
    fn from_module(module: &ModuleBlueprint) -> Self {
        Self {
            index: module.module.index(),
            launch: module.launch,
            dependencies: module.dependencies.iter().map(|d| d.key()).collect(),
        }
    }

    fn into_module(self, kind: ModuleKind, position: usize) -> Result<ModuleBlueprint, BlueprintError> {
        if self.index != position {
            return Err(BlueprintError::IndexMismatch {
                kind: kind.label(),
                position,
                index: self.index,
            });
        }

        let mut module = ModuleBlueprint::new(ModuleRef::new(kind, position));
        if self.launch && kind == ModuleKind::Java {
            return Err(BlueprintError::JavaLaunch(module.name()));
        }
        module.launch = self.launch;

        for key in self.dependencies {
            let dependency = key.parse::<ModuleRef>().map_err(|source| {
                BlueprintError::MalformedKey {
                    module: module.name(),
                    key: key.clone(),
                    source,
                }
            })?;
            module.depends_on(dependency);
        }

        Ok(module)
    }
}

impl StoredBlueprint {
    fn from_project(project: &ProjectBlueprint) -> Self {
        Self {
            name: project.name.clone(),
            android_modules: project.android_modules.iter().map(StoredModule::from_module).collect(),
            java_modules: project.java_modules.iter().map(StoredModule::from_module).collect(),
        }
    }

    fn into_project(self) -> Result<ProjectBlueprint, BlueprintError> {
        let mut project = ProjectBlueprint::new(self.name);

        for (position, stored) in self.android_modules.into_iter().enumerate() {
            project
                .android_modules
                .push(stored.into_module(ModuleKind::Android, position)?);
        }
        for (position, stored) in self.java_modules.into_iter().enumerate() {
            project
                .java_modules
                .push(stored.into_module(ModuleKind::Java, position)?);
        }

        Ok(project)
    }
}

/// Parses a blueprint from JSON text
pub fn parse_blueprint(json: &str) -> Result<ProjectBlueprint> {
    let stored: StoredBlueprint =
        serde_json::from_str(json).context("Failed to parse blueprint JSON")?;
    Ok(stored.into_project()?)
}

/// Serializes a blueprint as pretty JSON
pub fn blueprint_json(project: &ProjectBlueprint) -> Result<String> {
    serde_json::to_string_pretty(&StoredBlueprint::from_project(project))
        .context("Failed to serialize blueprint")
}

/// Store for a project blueprint
pub struct BlueprintStore {
    path: PathBuf,
}

impl BlueprintStore {
    /// Creates a store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store for a generated project
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(BLUEPRINT_FILE))
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the blueprint
    ///
    /// Fails on the first malformed dependency key; nothing is returned
    /// for a partially valid file.
    pub fn load(&self) -> Result<ProjectBlueprint> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open blueprint: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on blueprint")?;

        let stored: StoredBlueprint = serde_json::from_reader(BufReader::new(&file))
            .with_context(|| format!("Failed to parse blueprint: {}", self.path.display()))?;

        let project = stored
            .into_project()
            .with_context(|| format!("Invalid blueprint: {}", self.path.display()))?;

        // Lock is released when file is dropped
        Ok(project)
    }

    /// Writes the blueprint (full rewrite)
    pub fn save(&self, project: &ProjectBlueprint) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            // Acquire exclusive lock
            file.lock_exclusive()
                .context("Failed to acquire write lock on blueprint")?;

            let mut writer = BufWriter::new(&file);
            writer
                .write_all(blueprint_json(project)?.as_bytes())
                .context("Failed to write blueprint")?;
            writer.flush().context("Failed to flush blueprint")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
