//! Writes generated class and test files

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{class_source, test_source, ModuleSources};

/// Counts of written files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    pub modules: usize,
    pub classes: usize,
    pub tests: usize,
}

/// Writes sources below a project root
pub struct SourceWriter {
    root: PathBuf,
}

impl SourceWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn write_file(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source: {}", path.display()))
    }

    /// Writes every class of a module and its test
    pub fn write_module(&self, sources: &ModuleSources) -> Result<WriteSummary> {
        let mut summary = WriteSummary {
            modules: 1,
            ..WriteSummary::default()
        };

        for class in &sources.classes {
            self.write_file(&class.class_path(), &class_source(class))?;
            summary.classes += 1;

            let test = test_source(class)
                .with_context(|| format!("Failed to generate test for {}", class.full_class_name()))?;
            self.write_file(&class.test_class_path(), &test)?;
            summary.tests += 1;
        }

        tracing::debug!(module = %sources.module, classes = summary.classes, "wrote module sources");
        Ok(summary)
    }

    /// Writes all modules
    pub fn write_all(&self, modules: &[ModuleSources]) -> Result<WriteSummary> {
        let mut total = WriteSummary::default();
        for sources in modules {
            let summary = self.write_module(sources)?;
            total.modules += summary.modules;
            total.classes += summary.classes;
            total.tests += summary.tests;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_sources, ClassSettings, Language, ProjectBlueprint, ProjectShape};
    use tempfile::TempDir;

    fn sources(language: Language) -> Vec<ModuleSources> {
        let project = ProjectBlueprint::build(
            "Demo",
            &ProjectShape {
                android_modules: 1,
                java_modules: 2,
                classes_per_module: 2,
                methods_per_class: 3,
                dependencies_per_module: 1,
            },
        );
        let settings = ClassSettings {
            language,
            package_prefix: "com.poet".to_string(),
            classes_per_module: 2,
            methods_per_class: 3,
        };
        build_sources(&project, &settings).unwrap()
    }

    #[test]
    fn writes_classes_and_tests() {
        let dir = TempDir::new().unwrap();
        let writer = SourceWriter::new(dir.path());

        let summary = writer.write_all(&sources(Language::Kotlin)).unwrap();
        assert_eq!(
            summary,
            WriteSummary {
                modules: 3,
                classes: 6,
                tests: 6
            }
        );

        let class = dir
            .path()
            .join("module0/src/main/java/com/poet/module0/Foo1.kt");
        let text = fs::read_to_string(class).unwrap();
        assert!(text.starts_with("package com.poet.module0\n"));
        assert!(text.contains("com.poet.module0.Foo0().foo2()"));

        assert!(dir
            .path()
            .join("androidAppModule0/src/test/java/com/poet/androidappmodule0/Foo0Test.kt")
            .is_file());
    }

    #[test]
    fn java_sources_use_java_extension() {
        let dir = TempDir::new().unwrap();
        SourceWriter::new(dir.path())
            .write_all(&sources(Language::Java))
            .unwrap();

        assert!(dir
            .path()
            .join("module1/src/main/java/com/poet/module1/Foo0.java")
            .is_file());
    }
}
