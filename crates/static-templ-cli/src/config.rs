//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate only ever sees the
//! [`GenerateOptions`](static_templ_core::application::GenerateOptions) built
//! from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command, not here)
//! 2. Environment variables, `STATIC_TEMPL__<SECTION>__<KEY>`
//! 3. `.static-templ.toml` in the current directory
//! 4. The `--config` file, or the platform config file
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use static_templ_core::{application::ToolCommand, domain::Mode};

/// Project-local configuration file, looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".static-templ.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "STATIC_TEMPL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub tools: ToolsConfig,
    pub generate: GenerateConfig,
    pub output: OutputConfig,
}

/// Where components are read from and pages written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Directory holding `go.mod`.
    pub project_root: PathBuf,
    /// Holds the driver program, relative to `project_root`.
    pub scratch_dir: PathBuf,
}

/// External commands, program first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub formatter: Vec<String>,
    pub compiler: Vec<String>,
    pub go: String,
}

/// Defaults for `run` flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub mode: Mode,
    pub format: bool,
    pub compile: bool,
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("web/pages"),
            output: PathBuf::from("dist"),
            project_root: PathBuf::from("."),
            scratch_dir: PathBuf::from("temp"),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            formatter: vec!["templ".into(), "fmt".into()],
            compiler: vec!["templ".into(), "generate".into()],
            go: "go".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl ToolsConfig {
    pub fn formatter_command(&self) -> Option<ToolCommand> {
        tool_command(&self.formatter)
    }

    pub fn compiler_command(&self) -> Option<ToolCommand> {
        tool_command(&self.compiler)
    }

    /// `<go> run`, the driver path is appended by the service.
    pub fn driver_command(&self) -> Option<ToolCommand> {
        let go = self.go.trim();
        (!go.is_empty()).then(|| ToolCommand::new(go, ["run"]))
    }
}

fn tool_command(argv: &[String]) -> Option<ToolCommand> {
    let (program, args) = argv.split_first()?;
    if program.trim().is_empty() {
        return None;
    }
    Some(ToolCommand::new(program.trim(), args.iter().cloned()))
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path given with `--config`; it must exist. The
    /// platform file and [`LOCAL_CONFIG_FILE`] are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).format(FileFormat::Toml)),
            None => builder.add_source(
                File::from(Self::config_path().as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        let settings = builder
            .add_source(
                File::from(Path::new(LOCAL_CONFIG_FILE))
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("tools.formatter")
                    .with_list_parse_key("tools.compiler"),
            )
            .build()
            .context("Failed to read configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to [`LOCAL_CONFIG_FILE`] in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "static-templ", "static-templ")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_conventional_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.input, PathBuf::from("web/pages"));
        assert_eq!(cfg.paths.output, PathBuf::from("dist"));
        assert_eq!(cfg.paths.scratch_dir, PathBuf::from("temp"));
        assert_eq!(cfg.generate.mode, Mode::Bundle);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn default_tool_commands() {
        let tools = ToolsConfig::default();
        assert_eq!(
            tools.formatter_command(),
            Some(ToolCommand::new("templ", ["fmt"]))
        );
        assert_eq!(
            tools.compiler_command(),
            Some(ToolCommand::new("templ", ["generate"]))
        );
        assert_eq!(tools.driver_command(), Some(ToolCommand::new("go", ["run"])));
    }

    #[test]
    fn empty_tool_is_rejected() {
        let tools = ToolsConfig {
            formatter: vec![],
            compiler: vec!["  ".into()],
            go: String::new(),
        };
        assert!(tools.formatter_command().is_none());
        assert!(tools.compiler_command().is_none());
        assert!(tools.driver_command().is_none());
    }

    #[test]
    fn explicit_file_overrides_some_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[paths]\ninput = \"site\"\n\n[generate]\nmode = \"inline\"\ndebug = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.paths.input, PathBuf::from("site"));
        assert_eq!(cfg.paths.output, PathBuf::from("dist"));
        assert_eq!(cfg.generate.mode, Mode::Inline);
        assert!(cfg.generate.debug);
        assert_eq!(cfg.tools, ToolsConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn invalid_mode_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[generate]\nmode = \"sideways\"\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn toml_round_trips_defaults() {
        let cfg = AppConfig::default();
        let text = cfg.to_toml().unwrap();
        assert!(text.contains("[paths]"));
        assert!(text.contains("mode = \"bundle\""));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
