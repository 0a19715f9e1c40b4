//! `static-templ completions <shell> [--dir DIR]`.

use clap::CommandFactory;
use clap_complete::{generate, generate_to};

use crate::{
    cli::{Cli, CompletionsArgs},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Prints the script, or writes it into `--dir` under the shell's
/// conventional file name.
pub fn execute(args: CompletionsArgs, output: &OutputManager) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();

    match args.dir {
        Some(dir) => {
            let path = generate_to(args.shell, &mut cmd, bin_name, &dir).with_cli_context(|| {
                format!("Failed to write {} completions to {}", args.shell, dir.display())
            })?;
            output.success(&format!("Wrote {}", path.display()))?;
        }
        None => generate(args.shell, &mut cmd, bin_name, &mut std::io::stdout()),
    }
    Ok(())
}
