//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use static_templ_core::domain::Mode;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "static-templ",
    bin_name = "static-templ",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render templ components into static HTML files",
    long_about = "static-templ finds every exported, parameterless templ component \
                  under an input directory and renders each one to an HTML file.",
    after_help = "EXAMPLES:\n\
        \x20 static-templ run\n\
        \x20 static-templ run -i web/pages -o dist -g\n\
        \x20 static-templ run -m inline --dry-run\n\
        \x20 static-templ completions bash > ~/.local/share/bash-completion/completions/static-templ",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render every page component to HTML.
    #[command(
        visible_alias = "r",
        about = "Render components to static HTML",
        after_help = "EXAMPLES:\n\
            \x20 static-templ run                       # web/pages -> dist\n\
            \x20 static-templ run -i site -o public -f -g\n\
            \x20 static-templ run -m inline             # pages next to their components\n\
            \x20 static-templ run -d                    # keep the generated driver"
    )]
    Run(RunArgs),

    /// Print the tool version and the templ version it targets.
    #[command(about = "Show version information")]
    Version,

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 static-templ init           # platform config location\n\
            \x20 static-templ init --local   # .static-templ.toml in CWD"
    )]
    Init(InitArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 static-templ completions bash > ~/.local/share/bash-completion/completions/static-templ\n\
            \x20 static-templ completions zsh  > ~/.zfunc/_static-templ\n\
            \x20 static-templ completions fish --dir ~/.config/fish/completions"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Inspect configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 static-templ config show\n\
            \x20 static-templ config get paths.input\n\
            \x20 static-templ config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `static-templ run`. Unset options fall back to the config.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Directory to scan for components.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory [default: web/pages]"
    )]
    pub input: Option<PathBuf>,

    /// Root of the bundle (ignored in inline mode).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory [default: dist]"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        value_name = "MODE",
        help = "Where pages are written [default: bundle]"
    )]
    pub mode: Option<ModeArg>,

    /// Run `templ fmt` on the input directory first.
    #[arg(short = 'f', long = "format", help = "Format templ files first")]
    pub format: bool,

    /// Run `templ generate` first.
    #[arg(short = 'g', long = "generate", help = "Regenerate *_templ.go files first")]
    pub generate: bool,

    /// Keep the scratch directory and the driver program.
    #[arg(short = 'd', long = "debug", help = "Keep the generated driver program")]
    pub debug: bool,

    #[arg(
        long = "dry-run",
        help = "Show what would be rendered without writing anything"
    )]
    pub dry_run: bool,

    #[arg(
        long = "project-root",
        value_name = "DIR",
        help = "Directory holding go.mod [default: .]"
    )]
    pub project_root: Option<PathBuf>,
}

/// Output placement, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ModeArg {
    /// Mirror the input tree under the output directory, assets included.
    Bundle,
    /// Write each page next to its component.
    Inline,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Bundle => Mode::Bundle,
            ModeArg::Inline => Mode::Inline,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.static-templ.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,

    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Write the script into DIR instead of stdout"
    )]
    pub dir: Option<PathBuf>,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    #[command(visible_alias = "list")]
    Show,
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.input`.
        key: String,
    },
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
