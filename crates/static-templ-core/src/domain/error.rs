// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the report and the CLI unchanged)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Discovery results
    // ========================================================================
    #[error("no renderable components found in {searched} generated file(s)")]
    NoCandidates { searched: usize },

    // ========================================================================
    // Name resolution
    // ========================================================================
    #[error("output '{output_name}' in {directory} is produced by both {first} and {second}")]
    NameCollision {
        directory: String,
        output_name: String,
        first: String,
        second: String,
    },

    #[error("cannot derive an output name from '{source_name}'")]
    EmptySlug { source_name: String },

    #[error("component {entry} has no output name assigned")]
    UnresolvedName { entry: String },

    // ========================================================================
    // Reference resolution
    // ========================================================================
    #[error("invalid module path '{module}': {reason}")]
    InvalidModulePath { module: String, reason: String },

    #[error("import {import} of component {entry} is not among the resolved references")]
    UnresolvedImport { entry: String, import: String },

    #[error("{path} is outside of {root}")]
    OutsideRoot { path: String, root: String },

    #[error("unknown mode '{0}' (expected 'bundle' or 'inline')")]
    UnknownMode(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoCandidates { searched } => vec![
                format!("Searched {searched} '_templ.go' file(s) without finding a component"),
                "Components must be exported (start with an uppercase letter)".into(),
                "Components must take no parameters, e.g. `templ Index()`".into(),
                "Run `templ generate` first, or pass -g to let static-templ do it".into(),
            ],
            Self::NameCollision { output_name, .. } => vec![
                format!("Two components would both be written to '{output_name}'"),
                "Rename one of the components or move it to another directory".into(),
            ],
            Self::EmptySlug { source_name } => vec![format!(
                "'{source_name}' contains no letters or digits to build a file name from"
            )],
            Self::InvalidModulePath { .. } => vec![
                "Check the `module` directive in go.mod".into(),
                "Module paths look like `github.com/user/project`".into(),
            ],
            Self::OutsideRoot { root, .. } => vec![
                format!("Keep component sources inside {root}"),
                "Run static-templ from the directory that contains go.mod".into(),
            ],
            Self::UnknownMode(_) => vec!["Use --mode bundle or --mode inline".into()],
            Self::UnresolvedName { .. } | Self::UnresolvedImport { .. } => {
                vec!["This is a bug, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoCandidates { .. } => ErrorCategory::NotFound,
            Self::NameCollision { .. } | Self::EmptySlug { .. } | Self::UnknownMode(_) => {
                ErrorCategory::Validation
            }
            Self::InvalidModulePath { .. } | Self::OutsideRoot { .. } => {
                ErrorCategory::Configuration
            }
            Self::UnresolvedName { .. } | Self::UnresolvedImport { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
