//! Driver program generation.

mod code_builder;
mod go_emitter;

pub use code_builder::CodeBuilder;
pub use go_emitter::{GoDriverEmitter, go_string};

/// Module path of the templ runtime generated components depend on.
pub const TEMPL_MODULE: &str = "github.com/a-h/templ";

/// templ release this tool is built and tested against.
pub const TEMPL_VERSION: &str = "0.2.793";

/// File name of the driver inside the scratch directory.
pub const DRIVER_FILE_NAME: &str = "templ_static_generate_script.go";
