//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A generated component source could not be read or parsed.
    #[error("cannot discover components in {path}: {reason}")]
    Discovery { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// An external tool ran but exited unsuccessfully.
    #[error("{tool} exited with {}{}", exit_label(.code), output_suffix(.output))]
    ExternalTool {
        tool: String,
        code: Option<i32>,
        output: String,
    },

    /// An external tool could not be started at all.
    #[error("cannot start {tool}: {reason}")]
    ToolSpawn { tool: String, reason: String },

    /// The module-root descriptor is missing or unreadable.
    #[error("cannot read module descriptor {path}: {reason}")]
    ModuleDescriptor { path: PathBuf, reason: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn output_suffix(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Discovery { path, .. } => vec![
                format!("Check that {} is valid Go", path.display()),
                "Regenerate components with `templ generate` (or pass -g)".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::ExternalTool { tool, .. } => vec![
                format!("See the output of {tool} above"),
                "Rerun with --debug to keep the generated driver for inspection".into(),
            ],
            Self::ToolSpawn { tool, .. } => vec![
                format!("Make sure `{tool}` is installed and on your PATH"),
                "Tool commands can be changed in the [tools] config section".into(),
            ],
            Self::ModuleDescriptor { .. } => vec![
                "Run static-templ from the directory containing go.mod".into(),
                "Or set paths.project_root in the configuration".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Discovery { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::ExternalTool { .. } | Self::ToolSpawn { .. } => ErrorCategory::ExternalTool,
            Self::ModuleDescriptor { .. } => ErrorCategory::Configuration,
        }
    }
}
