//! Diagnostic logging for a generation run.
//!
//! Logs go to stderr so that `--output-format json` keeps stdout clean.
//! What each verbosity shows:
//!
//! | Flag(s)   | Level | Shows                                             |
//! |-----------|-------|---------------------------------------------------|
//! | `--quiet` | ERROR | failures only                                     |
//! | (none)    | WARN  | also skipped steps and cleanup problems           |
//! | `-v`      | INFO  | one line per stage, tool command lines            |
//! | `-vv`     | DEBUG | each scanned file, parsed package, planned render |
//! | `-vvv`    | TRACE | everything                                        |
//!
//! `STATIC_TEMPL_LOG`, then `RUST_LOG`, replace the flag-derived filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Environment variable holding a filter for this tool only.
pub const LOG_ENV: &str = "STATIC_TEMPL_LOG";

/// Crates whose events a run reports.
const LOG_TARGETS: &[&str] = &["static_templ", "static_templ_core", "static_templ_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        // Past -v the emitting module tells scanner, parser and runner apart.
        .with_target(args.verbose >= 2)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `target=level` for each of [`LOG_TARGETS`]; other crates stay off.
fn filter_directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_levels() {
        let levels: Vec<_> = (0..=4).map(|v| derive_level(&args_with(v, false))).collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_name_each_crate_once() {
        assert_eq!(
            filter_directives("debug"),
            "static_templ=debug,static_templ_core=debug,static_templ_adapters=debug"
        );
        assert!(EnvFilter::try_new(filter_directives("info")).is_ok());
    }
}
