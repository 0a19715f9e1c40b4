//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case "render every static component to HTML".

pub mod discovery;
pub mod generate_service;
pub mod scanner;

pub use discovery::ComponentDiscoverer;
pub use generate_service::{
    GenerateOptions, GenerateService, GenerationReport, RenderSummary, ToolCommand,
};
pub use scanner::FileScanner;
