use crate::domain::value_objects::{DeclarationKind, Visibility};

/// One top-level declaration found in a source file.
///
/// This is the whole contract between discovery and a language parser: a
/// parser only has to report identifiers, their kind, visibility and how
/// many value parameters they take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub identifier: String,
    pub kind: DeclarationKind,
    pub visibility: Visibility,
    pub parameter_count: usize,
    /// 1-based line of the identifier.
    pub line: usize,
}

impl Declaration {
    pub fn function(identifier: impl Into<String>, parameter_count: usize, line: usize) -> Self {
        let identifier = identifier.into();
        Self {
            visibility: Visibility::of(&identifier),
            identifier,
            kind: DeclarationKind::Function,
            parameter_count,
            line,
        }
    }

    pub fn with_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Exported, zero-argument, plain function: something we can call with
    /// no context to get a renderable component.
    pub fn is_render_entry_point(&self) -> bool {
        self.kind == DeclarationKind::Function
            && self.visibility.is_exported()
            && self.parameter_count == 0
    }
}

/// Result of structurally parsing one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource {
    pub package: String,
    pub declarations: Vec<Declaration>,
}

impl ParsedSource {
    pub fn entry_points(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations
            .iter()
            .filter(|d| d.is_render_entry_point())
    }
}
