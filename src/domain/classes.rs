//! Class sets for every module of a project
//!
//! Within a module, `Foo{j}` enters the chain of `Foo{j-1}`, and `Foo0`
//! enters the last class of every module the module depends on. Calling a
//! module's entry point therefore walks every chain it transitively reaches.

use std::collections::HashMap;

use thiserror::Error;

use super::chain::{ChainClass, ChainError, Language, MethodToCall};
use super::graph::{GraphError, ModuleGraph};
use super::key::ModuleRef;
use super::project::ProjectBlueprint;

#[derive(Debug, Error, PartialEq)]
pub enum SourcesError {
    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Module {0} has no classes, so it has no entry point")]
    EmptyModule(ModuleRef),
}

/// Settings shared by every generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSettings {
    pub language: Language,
    pub package_prefix: String,
    pub classes_per_module: usize,
    pub methods_per_class: usize,
}

/// The generated classes of one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSources {
    pub module: ModuleRef,
    pub package_name: String,
    pub classes: Vec<ChainClass>,
}

impl ModuleSources {
    /// Entry point of the module: the entry point of its last class
    pub fn entry_point(&self) -> Result<MethodToCall, SourcesError> {
        let last = self
            .classes
            .last()
            .ok_or(SourcesError::EmptyModule(self.module))?;
        Ok(last.method_to_call_from_outside()?)
    }
}

/// Package of a module's classes
pub fn package_name(prefix: &str, module: ModuleRef) -> String {
    format!("{}.{}", prefix, module.key().to_lowercase())
}

/// Builds the classes of every module, returned in global module order
///
/// Modules are processed in build order so each dependency's entry point is
/// known before its dependents link to it.
pub fn build_sources(
    project: &ProjectBlueprint,
    settings: &ClassSettings,
) -> Result<Vec<ModuleSources>, SourcesError> {
    let graph = ModuleGraph::from_project(project)?;
    let mut entry_points: HashMap<ModuleRef, MethodToCall> = HashMap::new();
    let mut built = Vec::with_capacity(graph.len());

    for module_ref in graph.build_order()? {
        let Some(module) = project.module(module_ref) else {
            continue;
        };

        let mut seeds: Vec<MethodToCall> = Vec::new();
        for dependency in &module.dependencies {
            let entry = entry_points
                .get(dependency)
                .ok_or(SourcesError::EmptyModule(*dependency))?;
            seeds.push(entry.clone());
        }

        let package = package_name(&settings.package_prefix, module_ref);
        let mut classes = Vec::with_capacity(settings.classes_per_module);
        for number in 0..settings.classes_per_module {
            let calls = match classes.last() {
                Some(previous) => vec![ChainClass::method_to_call_from_outside(previous)?],
                None => std::mem::take(&mut seeds),
            };
            classes.push(ChainClass::new(
                settings.language,
                package.clone(),
                number,
                settings.methods_per_class,
                module.name(),
                calls,
            ));
        }

        let sources = ModuleSources {
            module: module_ref,
            package_name: package,
            classes,
        };
        match sources.entry_point() {
            Ok(entry) => {
                entry_points.insert(module_ref, entry);
            }
            // Only a module something depends on needs an entry point
            Err(e) if !graph.dependents(module_ref).is_empty() => return Err(e),
            Err(_) => {}
        }

        tracing::debug!(
            module = %module_ref,
            classes = sources.classes.len(),
            "built module classes"
        );
        built.push(sources);
    }

    let layout = project.layout();
    built.sort_by_key(|s| layout.global_index(s.module));
    Ok(built)
}
