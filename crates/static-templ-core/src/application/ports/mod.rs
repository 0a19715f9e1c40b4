//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `static-templ-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `Filesystem`: directory walking and file operations
//!   - `DeclarationExtractor`: structural parse of generated sources
//!   - `ModuleDescriptor`: module root lookup
//!   - `DriverEmitter`: driver program source generation
//!   - `ProcessRunner`: external tool execution

pub mod output;

pub use output::{
    DeclarationExtractor, DriverEmitter, Filesystem, ModuleDescriptor, ProcessOutput,
    ProcessRunner, ProcessSpec,
};

#[cfg(test)]
pub use output::{
    MockDeclarationExtractor, MockDriverEmitter, MockFilesystem, MockModuleDescriptor,
    MockProcessRunner,
};
