//! Domain models for Poet
//!
//! Contains the project, chain and matrix logic without any I/O concerns.

mod key;
mod chain;
mod project;
mod graph;
mod matrix;
mod classes;
mod source;

pub use key::{KeyError, ModuleKind, ModuleRef, ANDROID_TAG, JAVA_TAG};
pub use chain::{
    class_name, method_name, ChainClass, ChainError, Language, MethodBlueprint, MethodToCall,
};
pub use project::{ModuleBlueprint, ModuleLayout, ProjectBlueprint, ProjectShape};
pub use graph::{GraphError, ModuleEdge, ModuleGraph};
pub use matrix::{DependencyMatrix, EdgeClass, MatrixCell, MatrixError, ModuleCategory};
pub use classes::{build_sources, package_name, ClassSettings, ModuleSources, SourcesError};
pub use source::{class_source, test_source};
