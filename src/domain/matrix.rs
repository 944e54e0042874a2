//! Dependency matrix
//!
//! An N×N view of a project's dependencies over the global module order.
//! Row `r` lists what module `r` depends on; each declared edge becomes a
//! cell classified as valid or as an error edge.

use serde::Serialize;
use thiserror::Error;

use super::key::{ModuleKind, ModuleRef};
use super::project::{ModuleBlueprint, ProjectBlueprint};

#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("Module {module} depends on {dependency}, which is outside the {count} {kind} modules")]
    DanglingDependency {
        module: ModuleRef,
        dependency: ModuleRef,
        kind: &'static str,
        count: usize,
    },
}

/// Validity of a dependency edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeClass {
    Valid,
    /// A java module depending on an android module
    Error,
}

impl EdgeClass {
    /// Java modules may only depend on java modules; android modules may depend on anything
    pub fn classify(owner: ModuleKind, dependency: ModuleKind) -> Self {
        match (owner, dependency) {
            (ModuleKind::Java, ModuleKind::Android) => EdgeClass::Error,
            _ => EdgeClass::Valid,
        }
    }
}

/// Header category of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleCategory {
    /// The android launch module
    App,
    AndroidLibrary,
    JavaLibrary,
}

impl ModuleCategory {
    pub fn of(module: &ModuleBlueprint) -> Self {
        match module.kind() {
            ModuleKind::Android if module.launch => ModuleCategory::App,
            ModuleKind::Android => ModuleCategory::AndroidLibrary,
            ModuleKind::Java => ModuleCategory::JavaLibrary,
        }
    }
}

/// One filled cell of the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub row: usize,
    pub column: usize,
    pub class: EdgeClass,
}

/// Classified dependency matrix of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyMatrix {
    /// Header category per global module index
    pub headers: Vec<ModuleCategory>,
    /// Declared edges in row order
    pub cells: Vec<MatrixCell>,
}

impl DependencyMatrix {
    /// Classifies every declared dependency of the project
    ///
    /// A dependency on a module the project doesn't have fails the whole
    /// matrix rather than being dropped.
    pub fn from_project(project: &ProjectBlueprint) -> Result<Self, MatrixError> {
        let layout = project.layout();
        let mut headers = Vec::with_capacity(layout.total());
        let mut cells = Vec::new();

        for (row, module) in project.modules().enumerate() {
            headers.push(ModuleCategory::of(module));

            for dependency in &module.dependencies {
                let column = layout.global_index(*dependency).ok_or_else(|| {
                    MatrixError::DanglingDependency {
                        module: module.module,
                        dependency: *dependency,
                        kind: dependency.kind().label(),
                        count: layout.count(dependency.kind()),
                    }
                })?;

                cells.push(MatrixCell {
                    row,
                    column,
                    class: EdgeClass::classify(module.kind(), dependency.kind()),
                });
            }
        }

        Ok(Self { headers, cells })
    }

    /// Number of modules (rows and columns)
    pub fn size(&self) -> usize {
        self.headers.len()
    }

    /// Returns the cell at the given position, if an edge was declared there
    pub fn cell(&self, row: usize, column: usize) -> Option<&MatrixCell> {
        self.cells.iter().find(|c| c.row == row && c.column == column)
    }

    pub fn error_count(&self) -> usize {
        self.cells.iter().filter(|c| c.class == EdgeClass::Error).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two android modules (0 launches) and one java module depending on android module 0
    fn scenario() -> ProjectBlueprint {
        let mut project = ProjectBlueprint::new("Scenario");

        let mut app = ModuleBlueprint::new(ModuleRef::android(0));
        app.launch = true;
        app.depends_on(ModuleRef::android(1));
        project.android_modules.push(app);
        project.android_modules.push(ModuleBlueprint::new(ModuleRef::android(1)));

        let mut java = ModuleBlueprint::new(ModuleRef::java(0));
        java.depends_on(ModuleRef::android(0));
        project.java_modules.push(java);

        project
    }

    #[test]
    fn classification_rules() {
        use ModuleKind::*;
        assert_eq!(EdgeClass::classify(Java, Android), EdgeClass::Error);
        assert_eq!(EdgeClass::classify(Java, Java), EdgeClass::Valid);
        assert_eq!(EdgeClass::classify(Android, Android), EdgeClass::Valid);
        assert_eq!(EdgeClass::classify(Android, Java), EdgeClass::Valid);
    }

    #[test]
    fn headers_follow_global_order() {
        let matrix = DependencyMatrix::from_project(&scenario()).unwrap();

        assert_eq!(matrix.size(), 3);
        assert_eq!(
            matrix.headers,
            vec![
                ModuleCategory::App,
                ModuleCategory::AndroidLibrary,
                ModuleCategory::JavaLibrary
            ]
        );
    }

    #[test]
    fn java_on_android_is_error_cell() {
        let matrix = DependencyMatrix::from_project(&scenario()).unwrap();

        let cell = matrix.cell(2, 0).unwrap();
        assert_eq!(cell.class, EdgeClass::Error);
        assert_eq!(matrix.cell(0, 1).unwrap().class, EdgeClass::Valid);
        assert_eq!(matrix.error_count(), 1);
        assert!(matrix.cell(1, 0).is_none());
    }

    #[test]
    fn java_columns_are_offset_by_android_count() {
        let mut project = scenario();
        project.android_modules[1].depends_on(ModuleRef::java(0));

        let matrix = DependencyMatrix::from_project(&project).unwrap();
        assert_eq!(matrix.cell(1, 2).unwrap().class, EdgeClass::Valid);
    }

    #[test]
    fn dangling_dependency_fails() {
        let mut project = scenario();
        project.java_modules[0].depends_on(ModuleRef::java(1));

        let err = DependencyMatrix::from_project(&project).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DanglingDependency {
                module: ModuleRef::java(0),
                dependency: ModuleRef::java(1),
                kind: "java",
                count: 1,
            }
        );
    }
}
