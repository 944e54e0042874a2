//! Call-chain class blueprints
//!
//! Every generated class holds a linear chain of methods where `foo{i}`
//! calls `foo{i-1}`. The chain root (`foo0`) instead calls the methods it was
//! seeded with, which is how chains in different classes and modules are
//! linked together. Callers always enter a class through its last method so
//! invoking it walks the whole chain.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Prefix of every generated method name
pub const METHOD_PREFIX: &str = "foo";

/// Prefix of every generated class name
pub const CLASS_PREFIX: &str = "Foo";

#[derive(Debug, Error, PartialEq)]
pub enum ChainError {
    #[error("Class {0} has no methods, so it has no entry point")]
    EmptyChain(String),
}

/// A method that can be called from another class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodToCall {
    pub class_name: String,
    pub method_name: String,
}

impl MethodToCall {
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
        }
    }
}

/// One generated method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodBlueprint {
    pub index: usize,
    pub statements: Vec<String>,
}

impl MethodBlueprint {
    pub fn new(index: usize, statements: Vec<String>) -> Self {
        Self { index, statements }
    }

    /// Returns the method name, derived from its index
    pub fn method_name(&self) -> String {
        method_name(self.index)
    }
}

/// Name of the method at `index`
pub fn method_name(index: usize) -> String {
    format!("{}{}", METHOD_PREFIX, index)
}

/// Name of the class with the given ordinal number
pub fn class_name(number: usize) -> String {
    format!("{}{}", CLASS_PREFIX, number)
}

/// Target language of generated sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Kotlin,
    Java,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kotlin => "kotlin",
            Language::Java => "java",
        }
    }

    /// Source file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Kotlin => "kt",
            Language::Java => "java",
        }
    }

    /// Statement calling a method on `this`
    pub fn local_call(&self, method: &str) -> String {
        match self {
            Language::Kotlin => format!("    {}()\n", method),
            Language::Java => format!("    {}();\n", method),
        }
    }

    /// Statement instantiating a class and calling one of its methods
    pub fn remote_call(&self, target: &MethodToCall) -> String {
        match self {
            Language::Kotlin => format!("    {}().{}()\n", target.class_name, target.method_name),
            Language::Java => format!("    new {}().{}();\n", target.class_name, target.method_name),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "java" => Ok(Language::Java),
            other => Err(format!("Unknown language '{}' (expected kotlin or java)", other)),
        }
    }
}

/// Blueprint of one chain class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainClass {
    package_name: String,
    class_name: String,
    module_root: String,
    methods_per_class: usize,
    methods_to_call: Vec<MethodToCall>,
    language: Language,
}

impl ChainClass {
    /// Creates the blueprint for class `Foo{class_number}` in `package_name`
    ///
    /// `methods_to_call` are invoked from the chain root, in order.
    pub fn new(
        language: Language,
        package_name: impl Into<String>,
        class_number: usize,
        methods_per_class: usize,
        module_root: impl Into<String>,
        methods_to_call: Vec<MethodToCall>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name(class_number),
            module_root: module_root.into(),
            methods_per_class,
            methods_to_call,
            language,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn methods_per_class(&self) -> usize {
        self.methods_per_class
    }

    /// Fully qualified class name (`package.ClassName`)
    pub fn full_class_name(&self) -> String {
        format!("{}.{}", self.package_name, self.class_name)
    }

    /// Package as a relative directory path
    pub fn package_path(&self) -> String {
        self.package_name.replace('.', "/")
    }

    /// Builds the method chain
    pub fn method_blueprints(&self) -> Vec<MethodBlueprint> {
        (0..self.methods_per_class)
            .map(|i| {
                let statements = if i > 0 {
                    vec![self.language.local_call(&method_name(i - 1))]
                } else {
                    self.methods_to_call
                        .iter()
                        .map(|target| self.language.remote_call(target))
                        .collect()
                };
                MethodBlueprint::new(i, statements)
            })
            .collect()
    }

    /// Path of the class source file
    pub fn class_path(&self) -> String {
        format!(
            "{}/src/main/java/{}/{}.{}",
            self.module_root,
            self.package_path(),
            self.class_name,
            self.language.extension()
        )
    }

    /// Path of the class test file
    pub fn test_class_path(&self) -> String {
        format!(
            "{}/src/test/java/{}/{}Test.{}",
            self.module_root,
            self.package_path(),
            self.class_name,
            self.language.extension()
        )
    }

    /// The chain's entry point: its last method
    pub fn method_to_call_from_outside(&self) -> Result<MethodToCall, ChainError> {
        let last = self
            .methods_per_class
            .checked_sub(1)
            .ok_or_else(|| ChainError::EmptyChain(self.full_class_name()))?;

        Ok(MethodToCall::new(self.full_class_name(), method_name(last)))
    }
}
