//! Source text of generated classes

use super::chain::{ChainClass, ChainError, Language};

/// Indents every non-empty line by one level
fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("    {}\n", line)
            }
        })
        .collect()
}

fn method_text(language: Language, name: &str, statements: &[String]) -> String {
    let body: String = statements.concat();
    match language {
        Language::Kotlin => format!("fun {}() {{\n{}}}\n", name, body),
        Language::Java => format!("public void {}() {{\n{}}}\n", name, body),
    }
}

/// Renders the class source file
pub fn class_source(class: &ChainClass) -> String {
    let language = class.language();
    let methods: Vec<String> = class
        .method_blueprints()
        .iter()
        .map(|m| indent(&method_text(language, &m.method_name(), &m.statements)))
        .collect();

    let header = match language {
        Language::Kotlin => format!("package {}\n\nclass {} {{\n", class.package_name(), class.class_name()),
        Language::Java => format!(
            "package {};\n\npublic class {} {{\n",
            class.package_name(),
            class.class_name()
        ),
    };

    format!("{}{}}}\n", header, methods.join("\n"))
}

/// Renders a test that walks the class's whole chain
pub fn test_source(class: &ChainClass) -> Result<String, ChainError> {
    let entry = class.method_to_call_from_outside()?;
    let test_name = format!("test{}", class.class_name());

    Ok(match class.language() {
        Language::Kotlin => format!(
            "package {pkg}\n\nimport org.junit.Test\n\nclass {class}Test {{\n    @Test\n    fun {test}() {{\n        {class}().{method}()\n    }}\n}}\n",
            pkg = class.package_name(),
            class = class.class_name(),
            test = test_name,
            method = entry.method_name,
        ),
        Language::Java => format!(
            "package {pkg};\n\nimport org.junit.Test;\n\npublic class {class}Test {{\n    @Test\n    public void {test}() {{\n        new {class}().{method}();\n    }}\n}}\n",
            pkg = class.package_name(),
            class = class.class_name(),
            test = test_name,
            method = entry.method_name,
        ),
    })
}
