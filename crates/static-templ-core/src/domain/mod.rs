// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for static-templ.
//!
//! Pure logic with no I/O: file roles, render entry points, output naming,
//! import references and the generation manifest. Reading files, parsing Go
//! and running processes happen behind the ports in
//! [`crate::application::ports`].
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or process calls
//! - **Deterministic**: results never depend on scan order
pub mod entities;
pub mod error;
pub mod naming;
pub mod references;
pub mod slug;
pub mod value_objects;

pub use entities::{
    candidate::Candidate,
    common::{normalize, relative_to, to_slash},
    declaration::{Declaration, ParsedSource},
    manifest::{GenerationManifest, OutputLayout, PlannedRender},
    source_file::{GroupedFiles, SourceFile},
};

pub use error::{DomainError, ErrorCategory};
pub use naming::{NameResolver, OUTPUT_EXTENSION};
pub use references::{ReferenceResolver, ReferenceSet};
pub use slug::slugify;

pub use value_objects::{
    COMPONENT_DEFINITION_EXTENSION, DeclarationKind, FileRole, GENERATED_COMPONENT_SUFFIX, Mode,
    ModulePath, SOURCE_EXTENSION, Visibility,
};
