//! Module dependency graph
//!
//! Checks a project blueprint for cycles and dangling references and
//! provides a build order (dependencies before dependents).
//! Uses petgraph for graph operations.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use super::key::ModuleRef;
use super::matrix::EdgeClass;
use super::project::ProjectBlueprint;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Module dependencies contain a cycle through {0}")]
    CycleDetected(ModuleRef),

    #[error("Module {module} depends on {dependency}, which does not exist")]
    DanglingDependency {
        module: ModuleRef,
        dependency: ModuleRef,
    },
}

/// A declared dependency between two modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleEdge {
    pub module: ModuleRef,
    pub dependency: ModuleRef,
    pub class: EdgeClass,
}

/// Directed graph of module dependencies
#[derive(Debug, Default)]
pub struct ModuleGraph {
    /// Edge direction: dependency -> dependent
    graph: DiGraph<ModuleRef, ()>,

    node_map: HashMap<ModuleRef, NodeIndex>,
}

impl ModuleGraph {
    /// Builds the graph for a project
    ///
    /// Fails if a module depends on a module the project doesn't have.
    pub fn from_project(project: &ProjectBlueprint) -> Result<Self, GraphError> {
        let mut graph = Self::default();

        // First pass: add all nodes
        for module in project.modules() {
            let idx = graph.graph.add_node(module.module);
            graph.node_map.insert(module.module, idx);
        }

        // Second pass: add all edges
        for module in project.modules() {
            let to = graph.node_map.get(&module.module).copied();
            for dependency in &module.dependencies {
                let from = graph.node_map.get(dependency).copied();
                let (Some(from), Some(to)) = (from, to) else {
                    return Err(GraphError::DanglingDependency {
                        module: module.module,
                        dependency: *dependency,
                    });
                };
                graph.graph.add_edge(from, to, ());
            }
        }

        Ok(graph)
    }

    /// Returns all modules with every dependency ahead of its dependents
    pub fn build_order(&self) -> Result<Vec<ModuleRef>, GraphError> {
        let order = toposort(&self.graph, None)
            .map_err(|cycle| GraphError::CycleDetected(self.graph[cycle.node_id()]))?;

        Ok(order.into_iter().map(|idx| self.graph[idx]).collect())
    }

    /// Returns the modules that depend on `module`
    pub fn dependents(&self, module: ModuleRef) -> Vec<ModuleRef> {
        let Some(idx) = self.node_map.get(&module) else {
            return vec![];
        };

        self.graph
            .neighbors_directed(*idx, petgraph::Direction::Outgoing)
            .map(|n| self.graph[n])
            .collect()
    }

    /// Returns every edge with its validity
    pub fn edges(&self) -> Vec<ModuleEdge> {
        let mut edges: Vec<_> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(from, to)| {
                let dependency = self.graph[from];
                let module = self.graph[to];
                ModuleEdge {
                    module,
                    dependency,
                    class: EdgeClass::classify(module.kind(), dependency.kind()),
                }
            })
            .collect();
        edges.sort_by_key(|e| (e.module, e.dependency));
        edges
    }

    /// Returns the edges that break the java-may-not-depend-on-android rule
    pub fn error_edges(&self) -> Vec<ModuleEdge> {
        self.edges()
            .into_iter()
            .filter(|e| e.class == EdgeClass::Error)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }
}
