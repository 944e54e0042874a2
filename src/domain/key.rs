//! Module references and the dependency key codec
//!
//! Key Format (no separator between tag and index):
//! - Android modules: `androidAppModule{index}` (e.g., `androidAppModule0`)
//! - Java modules: `module{index}` (e.g., `module12`)
//!
//! The tag is the non-digit prefix of the key; the remainder must be the
//! canonical decimal form of a zero-based index within the module kind.
//! Keys double as module names in generated projects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tag used for android module keys
pub const ANDROID_TAG: &str = "androidAppModule";

/// Tag used for java module keys
pub const JAVA_TAG: &str = "module";

#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error("Invalid dependency key '{0}': missing module tag")]
    MissingTag(String),

    #[error("Invalid dependency key '{key}': unknown module tag '{tag}'")]
    UnknownTag { key: String, tag: String },

    #[error("Invalid dependency key '{0}': missing module index")]
    MissingIndex(String),

    #[error("Invalid dependency key '{key}': bad module index '{index}'")]
    InvalidIndex { key: String, index: String },
}

/// Kind of a generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Android,
    Java,
}

impl ModuleKind {
    /// Returns the key tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            ModuleKind::Android => ANDROID_TAG,
            ModuleKind::Java => JAVA_TAG,
        }
    }

    /// Looks up the kind for a key tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            ANDROID_TAG => Some(ModuleKind::Android),
            JAVA_TAG => Some(ModuleKind::Java),
            _ => None,
        }
    }

    /// Returns a display label for the kind
    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::Android => "android",
            ModuleKind::Java => "java",
        }
    }
}

/// Reference to "the Nth module of kind K"
///
/// Serializes as its dependency key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleRef {
    kind: ModuleKind,
    index: usize,
}

impl ModuleRef {
    pub fn new(kind: ModuleKind, index: usize) -> Self {
        Self { kind, index }
    }

    pub fn android(index: usize) -> Self {
        Self::new(ModuleKind::Android, index)
    }

    pub fn java(index: usize) -> Self {
        Self::new(ModuleKind::Java, index)
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// Ordinal index within the module kind
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_android(&self) -> bool {
        self.kind == ModuleKind::Android
    }

    /// Encodes the reference as a dependency key
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.tag(), self.index)
    }
}

impl FromStr for ModuleRef {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(s.len());
        let (tag, digits) = s.split_at(split);

        if tag.is_empty() {
            return Err(KeyError::MissingTag(s.to_string()));
        }

        let kind = ModuleKind::from_tag(tag).ok_or_else(|| KeyError::UnknownTag {
            key: s.to_string(),
            tag: tag.to_string(),
        })?;

        if digits.is_empty() {
            return Err(KeyError::MissingIndex(s.to_string()));
        }

        // Leading zeros would make two keys name the same module
        let canonical = digits == "0" || !digits.starts_with('0');
        if !canonical || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(KeyError::InvalidIndex {
                key: s.to_string(),
                index: digits.to_string(),
            });
        }

        let index = digits.parse::<usize>().map_err(|_| KeyError::InvalidIndex {
            key: s.to_string(),
            index: digits.to_string(),
        })?;

        Ok(Self { kind, index })
    }
}

impl TryFrom<String> for ModuleRef {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModuleRef> for String {
    fn from(module: ModuleRef) -> Self {
        module.to_string()
    }
}
