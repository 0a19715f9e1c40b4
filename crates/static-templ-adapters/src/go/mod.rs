//! Go source adapters: declaration extraction and `go.mod` lookup.

pub mod modfile;
pub mod parser;

use std::path::Path;

use static_templ_core::{
    application::{ApplicationError, ports::DeclarationExtractor},
    domain::ParsedSource,
    error::StaticTemplResult,
};
use tracing::debug;

pub use parser::ParseError;
pub use modfile::GoModFile;

/// [`DeclarationExtractor`] for Go source files.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoDeclarationExtractor;

impl GoDeclarationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationExtractor for GoDeclarationExtractor {
    fn extract(&self, path: &Path, source: &str) -> StaticTemplResult<ParsedSource> {
        let parsed = parser::parse(source).map_err(|e| ApplicationError::Discovery {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(
            path = %path.display(),
            package = %parsed.package,
            declarations = parsed.declarations.len(),
            "Parsed"
        );
        Ok(parsed)
    }
}
