//! Domain value objects: Mode, FileRole, Visibility, DeclarationKind, ModulePath.
//!
//! These are pure value types with equality-by-value and no identity. This
//! file defines the types, their string representations, and their `FromStr`
//! parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Suffix `templ generate` gives to the Go files it produces.
pub const GENERATED_COMPONENT_SUFFIX: &str = "_templ.go";
/// Extension of Go source files.
pub const SOURCE_EXTENSION: &str = "go";
/// Extension of templ component definitions.
pub const COMPONENT_DEFINITION_EXTENSION: &str = "templ";

// ── Mode ─────────────────────────────────────────────────────────────────────

/// Where rendered pages land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Mirror the input tree under a separate output root, assets included.
    #[default]
    Bundle,
    /// Write each page next to the component that produced it.
    Inline,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bundle => "bundle",
            Self::Inline => "inline",
        }
    }

    pub const fn all() -> &'static [Mode] {
        &[Self::Bundle, Self::Inline]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bundle" => Ok(Self::Bundle),
            "inline" => Ok(Self::Inline),
            other => Err(DomainError::UnknownMode(other.to_string())),
        }
    }
}

// ── FileRole ─────────────────────────────────────────────────────────────────

/// The role a scanned file plays in generation.
///
/// Classification is a total partition: every path gets exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    /// `*_templ.go`, produced by `templ generate`.
    GeneratedComponentSource,
    /// `*.templ`.
    ComponentDefinitionSource,
    /// Any other `*.go` file.
    CompiledOrOtherGoSource,
    /// Everything else; copied verbatim in bundle mode.
    Other,
}

impl FileRole {
    /// Classify a path by its file name. First match wins.
    pub fn classify(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let extension = path.extension().and_then(|e| e.to_str());

        if name.ends_with(GENERATED_COMPONENT_SUFFIX) {
            Self::GeneratedComponentSource
        } else if extension == Some(SOURCE_EXTENSION) {
            Self::CompiledOrOtherGoSource
        } else if extension == Some(COMPONENT_DEFINITION_EXTENSION) {
            Self::ComponentDefinitionSource
        } else {
            Self::Other
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GeneratedComponentSource => "generated-component-source",
            Self::ComponentDefinitionSource => "component-definition-source",
            Self::CompiledOrOtherGoSource => "go-source",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Visibility ───────────────────────────────────────────────────────────────

/// Go visibility: exported identifiers start with an uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Exported,
    Unexported,
}

impl Visibility {
    pub fn of(identifier: &str) -> Self {
        match identifier.chars().next() {
            Some(c) if c.is_uppercase() => Self::Exported,
            _ => Self::Unexported,
        }
    }

    pub const fn is_exported(&self) -> bool {
        matches!(self, Self::Exported)
    }
}

// ── DeclarationKind ──────────────────────────────────────────────────────────

/// Kind of a top-level declaration reported by a declaration extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `func Name(...)`.
    Function,
    /// `func (r T) Name(...)`.
    Method,
    /// `type Name ...`.
    Type,
    /// `var Name ...` or `const Name ...`.
    Value,
}

// ── ModulePath ───────────────────────────────────────────────────────────────

/// A validated Go module path, e.g. `github.com/user/site`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePath(String);

impl ModulePath {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidModulePath {
            module: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("module path is empty"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid("module path contains whitespace"));
        }
        if raw.starts_with('/') || raw.ends_with('/') {
            return Err(invalid("module path cannot start or end with '/'"));
        }
        if raw.contains("//") {
            return Err(invalid("module path contains an empty element"));
        }
        if raw.contains('\\') {
            return Err(invalid("module path cannot contain '\\'"));
        }
        if raw.split('/').any(|element| element == "." || element == "..") {
            return Err(invalid("module path cannot contain '.' or '..' elements"));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ModulePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
