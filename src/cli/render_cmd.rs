//! Render command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::DependencyMatrix;
use crate::render::paint;
use crate::storage::{write_png, BlueprintStore, OutputSection};

/// Render the dependency matrix of a stored blueprint
pub fn run(output: &Output, blueprint: &Path, image: Option<PathBuf>) -> Result<()> {
    let project = BlueprintStore::new(blueprint).load()?;

    let path = image.unwrap_or_else(|| {
        blueprint
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(OutputSection::default().image_name)
    });

    // Nothing is written unless the whole matrix classifies
    let matrix = DependencyMatrix::from_project(&project)
        .with_context(|| format!("Cannot render {}", blueprint.display()))?;
    let img = paint(&matrix)?;
    write_png(&img, &path)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "image": path.display().to_string(),
            "modules": matrix.size(),
            "dependencies": matrix.cells.len(),
            "errors": matrix.error_count(),
            "size": img.width(),
        }));
    } else {
        output.success(&format!("Dependency matrix image saved at {}", path.display()));
        if matrix.error_count() > 0 {
            output.warn(&format!(
                "{} java module dependencies point at android modules (marked red)",
                matrix.error_count()
            ));
        }
    }

    Ok(())
}
