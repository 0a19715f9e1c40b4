//! Process runner backed by `std::process::Command`.

use std::process::Command;

use static_templ_core::{
    application::{
        ApplicationError,
        ports::{ProcessOutput, ProcessRunner, ProcessSpec},
    },
    error::StaticTemplResult,
};
use tracing::debug;

/// Runs a command to completion and captures its output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, spec: &ProcessSpec) -> StaticTemplResult<ProcessOutput> {
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.current_dir)
            .output()
            .map_err(|e| ApplicationError::ToolSpawn {
                tool: spec.program.clone(),
                reason: e.to_string(),
            })?;

        let result = ProcessOutput {
            status_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            command = %spec.command_line(),
            status = ?result.status_code,
            "Process finished"
        );
        Ok(result)
    }
}
