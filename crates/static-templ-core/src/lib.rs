//! static-templ core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for static-templ,
//! a tool that renders every parameterless templ component of a Go project
//! to a static HTML file.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        static-templ-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (FileScanner, ComponentDiscoverer,     │
//! │   GenerateService)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, DeclarationExtractor,     │
//! │   ModuleDescriptor, DriverEmitter,      │
//! │   ProcessRunner)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    static-templ-adapters (Infra)        │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Candidate, NameResolver,              │
//! │   ReferenceResolver, GenerationManifest)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use static_templ_core::prelude::*;
//!
//! let service = GenerateService::new(filesystem, extractor, modules, emitter, runner);
//! let report = service.generate(&GenerateOptions::new("/site/web", "/site/dist", "/site"))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentDiscoverer, FileScanner, GenerateOptions, GenerateService, GenerationReport,
        RenderSummary, ToolCommand,
        ports::{
            DeclarationExtractor, DriverEmitter, Filesystem, ModuleDescriptor, ProcessOutput,
            ProcessRunner, ProcessSpec,
        },
    };
    pub use crate::domain::{
        Candidate, Declaration, DeclarationKind, FileRole, GenerationManifest, GroupedFiles, Mode,
        ModulePath, OutputLayout, ParsedSource, PlannedRender, Visibility,
    };
    pub use crate::error::{ErrorCategory, Stage, StaticTemplError, StaticTemplResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
