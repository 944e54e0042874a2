//! Chain command: prints one generated class

use anyhow::{bail, Result};

use super::output::Output;
use crate::domain::{class_source, ChainClass, Language, MethodToCall};

/// Options for a single generated class
#[derive(Debug, Clone)]
pub struct ChainRequest {
    pub methods: usize,
    pub calls: Vec<String>,
    pub class: usize,
    pub package: String,
    pub module: String,
    pub language: Language,
}

/// Parses `Class.method`; the class part may itself be qualified
fn parse_call(call: &str) -> Result<MethodToCall> {
    match call.rsplit_once('.') {
        Some((class, method)) if !class.is_empty() && !method.is_empty() => {
            Ok(MethodToCall::new(class, method))
        }
        _ => bail!("Invalid call '{}': expected Class.method", call),
    }
}

/// Print the class built from the request
pub fn run(output: &Output, request: ChainRequest) -> Result<()> {
    let calls = request
        .calls
        .iter()
        .map(|c| parse_call(c))
        .collect::<Result<Vec<_>>>()?;

    let class = ChainClass::new(
        request.language,
        request.package,
        request.class,
        request.methods,
        request.module,
        calls,
    );

    // An empty chain has no entry point to report
    let entry_point = if class.methods_per_class() > 0 {
        Some(class.method_to_call_from_outside()?)
    } else {
        None
    };

    if output.is_json() {
        let methods: Vec<_> = class
            .method_blueprints()
            .into_iter()
            .map(|m| {
                serde_json::json!({
                    "name": m.method_name(),
                    "index": m.index,
                    "statements": m.statements,
                })
            })
            .collect();

        output.data(&serde_json::json!({
            "class": class.full_class_name(),
            "class_path": class.class_path(),
            "test_path": class.test_class_path(),
            "entry_point": entry_point,
            "methods": methods,
        }));
    } else {
        print!("{}", class_source(&class));
        if let Some(entry) = entry_point {
            output.success(&format!("// entry point: {}.{}", entry.class_name, entry.method_name));
        }
    }

    Ok(())
}
