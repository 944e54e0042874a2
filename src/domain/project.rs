//! Project blueprint model
//!
//! A project is a list of android modules followed by a list of java modules.
//! That ordering is global: matrix rows, matrix columns and build order all
//! index modules through [`ModuleLayout`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::key::{ModuleKind, ModuleRef};

/// Module counts per kind; owns the global module index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleLayout {
    pub android_count: usize,
    pub java_count: usize,
}

impl ModuleLayout {
    pub fn new(android_count: usize, java_count: usize) -> Self {
        Self {
            android_count,
            java_count,
        }
    }

    /// Total number of modules
    pub fn total(&self) -> usize {
        self.android_count + self.java_count
    }

    /// Number of modules of the given kind
    pub fn count(&self, kind: ModuleKind) -> usize {
        match kind {
            ModuleKind::Android => self.android_count,
            ModuleKind::Java => self.java_count,
        }
    }

    /// Returns true if the reference names an existing module
    pub fn contains(&self, module: ModuleRef) -> bool {
        module.index() < self.count(module.kind())
    }

    /// Position of a module in `[android..., java...]`, or None if it doesn't exist
    pub fn global_index(&self, module: ModuleRef) -> Option<usize> {
        if !self.contains(module) {
            return None;
        }

        Some(match module.kind() {
            ModuleKind::Android => module.index(),
            ModuleKind::Java => self.android_count + module.index(),
        })
    }
}

/// One module of a project and the modules it depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleBlueprint {
    pub module: ModuleRef,
    /// Whether this is the launch (app) module; android only
    pub launch: bool,
    pub dependencies: BTreeSet<ModuleRef>,
}

impl ModuleBlueprint {
    pub fn new(module: ModuleRef) -> Self {
        Self {
            module,
            launch: false,
            dependencies: BTreeSet::new(),
        }
    }

    /// Module name, which is also its dependency key
    pub fn name(&self) -> String {
        self.module.key()
    }

    pub fn kind(&self) -> ModuleKind {
        self.module.kind()
    }

    /// Adds a dependency; returns false if it was already declared
    pub fn depends_on(&mut self, dependency: ModuleRef) -> bool {
        self.dependencies.insert(dependency)
    }
}

/// Counts that control the shape of a generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectShape {
    pub android_modules: usize,
    pub java_modules: usize,
    pub classes_per_module: usize,
    pub methods_per_class: usize,
    pub dependencies_per_module: usize,
}

impl Default for ProjectShape {
    fn default() -> Self {
        Self {
            android_modules: 2,
            java_modules: 4,
            classes_per_module: 5,
            methods_per_class: 10,
            dependencies_per_module: 2,
        }
    }
}

/// The full module list of a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBlueprint {
    pub name: String,
    pub android_modules: Vec<ModuleBlueprint>,
    pub java_modules: Vec<ModuleBlueprint>,
}

impl ProjectBlueprint {
    /// Creates an empty project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            android_modules: Vec::new(),
            java_modules: Vec::new(),
        }
    }

    /// Builds the module list for a project shape
    ///
    /// Android module 0 is the launch module. Modules only depend on
    /// modules with a higher index of the same kind, and android modules
    /// additionally pull in one java module, so the result is acyclic and
    /// never has a java module depending on an android module.
    pub fn build(name: impl Into<String>, shape: &ProjectShape) -> Self {
        let mut project = Self::new(name);
        let fan_out = shape.dependencies_per_module;

        for i in 0..shape.android_modules {
            let mut module = ModuleBlueprint::new(ModuleRef::android(i));
            module.launch = i == 0;

            let last = i.saturating_add(fan_out).min(shape.android_modules.saturating_sub(1));
            for dep in (i + 1)..=last {
                module.depends_on(ModuleRef::android(dep));
            }
            if shape.java_modules > 0 {
                module.depends_on(ModuleRef::java(i % shape.java_modules));
            }

            project.android_modules.push(module);
        }

        for i in 0..shape.java_modules {
            let mut module = ModuleBlueprint::new(ModuleRef::java(i));

            let last = i.saturating_add(fan_out).min(shape.java_modules.saturating_sub(1));
            for dep in (i + 1)..=last {
                module.depends_on(ModuleRef::java(dep));
            }

            project.java_modules.push(module);
        }

        project
    }

    pub fn layout(&self) -> ModuleLayout {
        ModuleLayout::new(self.android_modules.len(), self.java_modules.len())
    }

    /// All modules in global order (android first)
    pub fn modules(&self) -> impl Iterator<Item = &ModuleBlueprint> {
        self.android_modules.iter().chain(self.java_modules.iter())
    }

    /// Looks up a module by reference
    pub fn module(&self, module: ModuleRef) -> Option<&ModuleBlueprint> {
        match module.kind() {
            ModuleKind::Android => self.android_modules.get(module.index()),
            ModuleKind::Java => self.java_modules.get(module.index()),
        }
    }

    /// Returns the launch module, if any
    pub fn launch_module(&self) -> Option<&ModuleBlueprint> {
        self.android_modules.iter().find(|m| m.launch)
    }

    /// Total number of declared dependency edges
    pub fn dependency_count(&self) -> usize {
        self.modules().map(|m| m.dependencies.len()).sum()
    }
}
