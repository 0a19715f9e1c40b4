//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `static-templ-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{GenerationManifest, ParsedSource};
use crate::error::StaticTemplResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `static_templ_adapters::filesystem::LocalFilesystem` (production)
/// - `static_templ_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every failure is reported as `ApplicationError::Filesystem`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Every regular file below `root`, recursively, in a stable order.
    fn walk_files(&self, root: &Path) -> StaticTemplResult<Vec<PathBuf>>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> StaticTemplResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> StaticTemplResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StaticTemplResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StaticTemplResult<()>;

    /// Byte-for-byte copy. The destination's parent must exist.
    fn copy_file(&self, from: &Path, to: &Path) -> StaticTemplResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the structural parse of a generated component source.
///
/// Any syntax error must surface as an error; partial results are never
/// returned.
#[cfg_attr(test, mockall::automock)]
pub trait DeclarationExtractor: Send + Sync {
    fn extract(&self, path: &Path, source: &str) -> StaticTemplResult<ParsedSource>;
}

/// Port for reading the module root of a project.
#[cfg_attr(test, mockall::automock)]
pub trait ModuleDescriptor: Send + Sync {
    /// Module path declared for the project at `project_root`.
    fn module_path(&self, project_root: &Path) -> StaticTemplResult<String>;
}

/// Port for generating the driver program.
#[cfg_attr(test, mockall::automock)]
pub trait DriverEmitter: Send + Sync {
    /// Complete driver source for `manifest`.
    fn emit(&self, manifest: &GenerationManifest) -> String;

    /// File name the driver is written under inside the scratch directory.
    fn file_name(&self) -> &'static str;
}

/// A command to run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl ProcessSpec {
    pub fn new(program: impl Into<String>, current_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `program arg1 arg2`, for logs and error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal.
    pub status_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status_code == Some(0)
    }

    /// stdout and stderr joined, for diagnostics.
    pub fn combined(&self) -> String {
        match (self.stdout.trim().is_empty(), self.stderr.trim().is_empty()) {
            (true, _) => self.stderr.clone(),
            (false, true) => self.stdout.clone(),
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr),
        }
    }
}

/// Port for running external tools.
///
/// Blocking; no timeout and no retry. Failing to start the process is an
/// `ApplicationError::ToolSpawn`, a nonzero exit is reported through
/// [`ProcessOutput::status_code`] and left to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, spec: &ProcessSpec) -> StaticTemplResult<ProcessOutput>;
}
