//! Implementation of the `static-templ run` command.
//!
//! Responsibility: merge CLI flags over the configuration, call the core
//! generate service, and display the report. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use static_templ_core::{
    application::{GenerateOptions, ToolCommand},
    domain::Mode,
};

use crate::{
    cli::{ModeArg, RunArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: RunArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;

    if args.output.is_some() && args.mode == Some(ModeArg::Inline) {
        output.warning("--output is ignored in inline mode")?;
    }

    let options = build_options(&args, config, &cwd)?;

    if !options.input_root.exists() {
        return Err(CliError::InputNotFound {
            path: options.input_root,
        });
    }
    if !options.input_root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", options.input_root.display()),
            source: None,
        });
    }

    info!(
        input = %options.input_root.display(),
        output = %options.output_root.display(),
        mode = %options.mode,
        dry_run = options.dry_run,
        "Starting generation"
    );

    let service = static_templ_adapters::local_generate_service();
    let report = service.generate(&options)?;

    debug!(renders = report.renders.len(), "Generation finished");
    output.report(&report, &cwd)?;
    Ok(())
}

/// Flags win over config; relative paths are taken from `cwd`.
fn build_options(args: &RunArgs, config: &AppConfig, cwd: &Path) -> CliResult<GenerateOptions> {
    let pick = |flag: &Option<PathBuf>, configured: &PathBuf| {
        cwd.join(flag.as_ref().unwrap_or(configured))
    };

    let mut options = GenerateOptions::new(
        pick(&args.input, &config.paths.input),
        pick(&args.output, &config.paths.output),
        pick(&args.project_root, &config.paths.project_root),
    );

    options.scratch_dir = config.paths.scratch_dir.clone();
    if options.scratch_dir.is_absolute() || options.scratch_dir.as_os_str().is_empty() {
        return Err(CliError::ConfigError {
            message: format!(
                "paths.scratch_dir must be a relative directory, got '{}'",
                options.scratch_dir.display()
            ),
            source: None,
        });
    }

    options.mode = args.mode.map(Mode::from).unwrap_or(config.generate.mode);
    options.run_formatter = args.format || config.generate.format;
    options.run_compiler = args.generate || config.generate.compile;
    options.debug = args.debug || config.generate.debug;
    options.dry_run = args.dry_run;

    options.formatter = required_tool(config.tools.formatter_command(), "tools.formatter")?;
    options.compiler = required_tool(config.tools.compiler_command(), "tools.compiler")?;
    options.driver = required_tool(config.tools.driver_command(), "tools.go")?;

    Ok(options)
}

fn required_tool(command: Option<ToolCommand>, key: &str) -> CliResult<ToolCommand> {
    command.ok_or_else(|| CliError::ConfigError {
        message: format!("{key} must name a program"),
        source: None,
    })
}
