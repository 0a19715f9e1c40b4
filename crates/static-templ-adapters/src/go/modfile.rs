//! `go.mod` reader.

use std::path::Path;

use static_templ_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ModuleDescriptor},
    },
    error::StaticTemplResult,
};
use tracing::debug;

use crate::filesystem::LocalFilesystem;

pub const GO_MOD_FILE: &str = "go.mod";

/// Reads the `module` directive of `<project root>/go.mod` through a
/// [`Filesystem`].
#[derive(Debug, Clone, Default)]
pub struct GoModFile<F = LocalFilesystem> {
    fs: F,
}

impl GoModFile {
    pub fn new() -> Self {
        Self::with_filesystem(LocalFilesystem::new())
    }
}

impl<F: Filesystem> GoModFile<F> {
    pub fn with_filesystem(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: Filesystem> ModuleDescriptor for GoModFile<F> {
    fn module_path(&self, project_root: &Path) -> StaticTemplResult<String> {
        let path = project_root.join(GO_MOD_FILE);
        if !self.fs.exists(&path) {
            return Err(ApplicationError::ModuleDescriptor {
                path,
                reason: "file not found".into(),
            }
            .into());
        }
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|e| ApplicationError::ModuleDescriptor {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let module = module_directive(&content).ok_or_else(|| ApplicationError::ModuleDescriptor {
            path: path.clone(),
            reason: "no module directive".into(),
        })?;

        debug!(path = %path.display(), module = %module, "Module path read");
        Ok(module)
    }
}

/// Value of the `module` directive, unquoted. Comments are ignored.
pub fn module_directive(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or_default().trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(|c: char| c.is_whitespace() || c == '"' || c == '`') {
            return None;
        }
        let value = rest.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('`').and_then(|v| v.strip_suffix('`')))
            .unwrap_or(value);
        (!value.is_empty()).then(|| value.to_string())
    })
}
