pub mod candidate;
pub mod common;
pub mod declaration;
pub mod manifest;
pub mod source_file;

pub use crate::domain::DomainError;
pub use candidate::Candidate;
pub use declaration::{Declaration, ParsedSource};
pub use manifest::{GenerationManifest, OutputLayout, PlannedRender};
pub use source_file::{GroupedFiles, SourceFile};
