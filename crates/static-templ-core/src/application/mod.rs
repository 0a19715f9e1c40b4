//! Application layer for static-templ.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`FileScanner`, `ComponentDiscoverer`,
//!   `GenerateService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or resolution rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ComponentDiscoverer, FileScanner, GenerateOptions, GenerateService, GenerationReport,
    RenderSummary, ToolCommand,
};

pub use ports::{
    DeclarationExtractor, DriverEmitter, Filesystem, ModuleDescriptor, ProcessOutput,
    ProcessRunner, ProcessSpec,
};

pub use error::ApplicationError;
