//! Validate command

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::ModuleGraph;
use crate::storage::BlueprintStore;

/// Check a stored blueprint for error edges and cycles
pub fn run(output: &Output, blueprint: &Path) -> Result<()> {
    let project = BlueprintStore::new(blueprint).load()?;
    let graph = ModuleGraph::from_project(&project)?;

    let error_edges = graph.error_edges();
    let cycle = graph.build_order().err();
    tracing::debug!(
        modules = graph.len(),
        errors = error_edges.len(),
        cyclic = cycle.is_some(),
        "validated blueprint"
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "valid": error_edges.is_empty() && cycle.is_none(),
            "modules": graph.len(),
            "dependencies": project.dependency_count(),
            "error_edges": error_edges,
            "cycle": cycle.as_ref().map(|e| e.to_string()),
        }));
    } else {
        if error_edges.is_empty() && cycle.is_none() {
            output.success(&format!(
                "Blueprint is valid: {} modules, {} dependencies",
                graph.len(),
                project.dependency_count()
            ));
        }
        if !error_edges.is_empty() {
            println!("Invalid dependencies ({}):", error_edges.len());
            println!("{:<24} DEPENDS ON", "MODULE");
            println!("{}", "-".repeat(48));
            for edge in &error_edges {
                output.row(&[&format!("{:<24}", edge.module), &edge.dependency.to_string()]);
            }
        }
        if let Some(cycle) = &cycle {
            println!("{}", cycle);
        }
    }

    if !error_edges.is_empty() || cycle.is_some() {
        anyhow::bail!(
            "Blueprint {} has {} invalid dependencies{}",
            blueprint.display(),
            error_edges.len(),
            if cycle.is_some() { " and a cycle" } else { "" }
        );
    }

    Ok(())
}
