//! Project generation command

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::output::Output;
use crate::domain::{build_sources, Language, ProjectBlueprint};
use crate::render::paint_project;
use crate::storage::{write_png, BlueprintStore, Config, SourceWriter, CONFIG_FILE};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to configuration file
    #[arg(long, short, env = "POET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root (defaults to the project name)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// Number of android modules
    #[arg(long)]
    pub android: Option<usize>,

    /// Number of java modules
    #[arg(long)]
    pub java: Option<usize>,

    /// Classes per module
    #[arg(long)]
    pub classes: Option<usize>,

    /// Methods per class
    #[arg(long)]
    pub methods: Option<usize>,

    /// Dependencies per module
    #[arg(long)]
    pub deps: Option<usize>,

    /// Target language (kotlin or java)
    #[arg(long, short)]
    pub language: Option<Language>,

    /// Skip the dependency matrix image
    #[arg(long)]
    pub no_image: bool,
}

impl GenerateArgs {
    /// Applies command-line overrides on top of the loaded config
    fn apply(&self, config: &mut Config) {
        if let Some(name) = &self.name {
            config.project.name = name.clone();
        }
        if let Some(language) = self.language {
            config.project.language = language;
        }
        if let Some(n) = self.android {
            config.shape.android_modules = n;
        }
        if let Some(n) = self.java {
            config.shape.java_modules = n;
        }
        if let Some(n) = self.classes {
            config.shape.classes_per_module = n;
        }
        if let Some(n) = self.methods {
            config.shape.methods_per_class = n;
        }
        if let Some(n) = self.deps {
            config.shape.dependencies_per_module = n;
        }
        if self.no_image {
            config.output.render_image = false;
        }
    }
}

/// Generate a project
pub fn run(args: GenerateArgs, output: &Output) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;
    tracing::debug!(?config, "effective configuration");

    let root = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.project.name));

    let project = ProjectBlueprint::build(&config.project.name, &config.shape);
    tracing::debug!(
        modules = project.layout().total(),
        dependencies = project.dependency_count(),
        "built project blueprint"
    );

    let sources = build_sources(&project, &config.class_settings())
        .context("Failed to build module classes")?;
    let summary = SourceWriter::new(&root).write_all(&sources)?;

    let store = BlueprintStore::for_project(&root);
    store.save(&project)?;

    // Record the effective settings so the project can be regenerated
    let config_path = root.join(CONFIG_FILE);
    fs::write(&config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;

    let image = if config.output.render_image {
        let img = paint_project(&project).context("Failed to render dependency matrix")?;
        let path = root.join(&config.output.image_name);
        write_png(&img, &path)?;
        Some(path)
    } else {
        None
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "root": root.display().to_string(),
            "language": config.project.language.as_str(),
            "modules": summary.modules,
            "classes": summary.classes,
            "tests": summary.tests,
            "dependencies": project.dependency_count(),
            "blueprint": store.path().display().to_string(),
            "image": image.as_ref().map(|p| p.display().to_string()),
        }));
    } else {
        output.success(&format!(
            "Generated {} modules ({} classes, {} tests) at {}",
            summary.modules,
            summary.classes,
            summary.tests,
            root.display()
        ));
        output.success(&format!("Blueprint saved at {}", store.path().display()));
        if let Some(path) = image {
            output.success(&format!("Dependency matrix image saved at {}", path.display()));
        }
    }

    Ok(())
}
