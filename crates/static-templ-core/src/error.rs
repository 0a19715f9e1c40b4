//! Unified error handling for static-templ core.
//!
//! Wraps domain and application errors, tags them with the pipeline stage
//! that failed and exposes user-actionable suggestions.

use std::fmt;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Format,
    Recompile,
    Scan,
    Discover,
    Resolve,
    Assets,
    Emit,
    Execute,
    Cleanup,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Recompile => "recompile",
            Self::Scan => "scan",
            Self::Discover => "discover",
            Self::Resolve => "resolve",
            Self::Assets => "assets",
            Self::Emit => "emit",
            Self::Execute => "execute",
            Self::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root error type for static-templ core operations.
#[derive(Debug, Error, Clone)]
pub enum StaticTemplError {
    /// Errors from the domain layer (rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// An error tagged with the stage it aborted.
    #[error("{stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<StaticTemplError>,
    },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StaticTemplError {
    /// Tag this error with the stage it aborted. Already tagged errors keep
    /// their original stage.
    pub fn at(self, stage: Stage) -> Self {
        match self {
            Self::Stage { .. } => self,
            other => Self::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    /// Stage this error was raised in, if tagged.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The error without its stage tag.
    pub fn root(&self) -> &Self {
        match self {
            Self::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run `static-templ config show` to inspect the effective settings".into(),
            ],
            Self::Stage { source, .. } => source.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in static-templ".into()],
        }
    }

    /// Get error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Stage { source, .. } => source.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    ExternalTool,
    Internal,
}

/// Convenient result type alias.
pub type StaticTemplResult<T> = Result<T, StaticTemplError>;

/// Extension trait for tagging results with a pipeline stage.
pub trait AtStage<T> {
    fn at_stage(self, stage: Stage) -> StaticTemplResult<T>;
}

impl<T, E> AtStage<T> for Result<T, E>
where
    E: Into<StaticTemplError>,
{
    fn at_stage(self, stage: Stage) -> StaticTemplResult<T> {
        self.map_err(|e| e.into().at(stage))
    }
}
