//! Poet CLI - Synthetic multi-module project generator
//!
//! Poet fabricates projects whose shape is controlled by a handful of counts
//! (android modules, java modules, classes, methods, dependencies). Classes
//! hold linear method call chains linked across modules, and the module
//! dependency graph is rendered as a pixel-grid matrix image.

pub mod domain;
pub mod render;
pub mod storage;
pub mod cli;

pub use domain::{ChainClass, DependencyMatrix, Language, ModuleKind, ModuleRef, ProjectBlueprint};
