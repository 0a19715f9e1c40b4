//! Infrastructure adapters for static-templ.
//!
//! This crate implements the ports defined in
//! `static_templ_core::application::ports`. It contains all I/O: the local
//! filesystem, Go source parsing, driver generation and process execution.

pub mod driver;
pub mod filesystem;
pub mod go;
pub mod process;

// Re-export commonly used adapters
pub use driver::{GoDriverEmitter, TEMPL_MODULE, TEMPL_VERSION};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use go::{GoDeclarationExtractor, GoModFile};
pub use process::SystemProcessRunner;

use static_templ_core::application::GenerateService;

/// A [`GenerateService`] wired to the production adapters.
pub fn local_generate_service() -> GenerateService {
    GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GoDeclarationExtractor::new()),
        Box::new(GoModFile::new()),
        Box::new(GoDriverEmitter::new()),
        Box::new(SystemProcessRunner::new()),
    )
}
