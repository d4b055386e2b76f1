//! Child process execution
//!
//! Runs an assembled command, echoing it first so the user always sees
//! the exact CMake invocation, and maps the child's exit status onto the
//! error taxonomy.

use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::error::EcwError;

/// Call (and echo) a command, optionally silencing its standard output.
///
/// The command is echoed to stdout as `> token token ...` before
/// execution. With `quiet`, the child's stdout goes to a discard sink;
/// stderr is never suppressed. Blocks until the child exits and fails
/// with [`EcwError::ToolFailed`] on a non-zero status.
pub fn run(command: &[String], quiet: bool) -> Result<()> {
    let (program, args) = command
        .split_first()
        .context("Cannot execute an empty command")?;

    println!("> {}", command.join(" "));

    // A clear diagnostic beats the raw OS spawn error.
    which::which(program).map_err(|_| EcwError::ToolNotFound {
        program: program.clone(),
    })?;

    let mut child = Command::new(program);
    child.args(args);
    if quiet {
        child.stdout(Stdio::null());
    }

    let status = child.status().map_err(|e| EcwError::SpawnFailed {
        program: program.clone(),
        error: e.to_string(),
    })?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(EcwError::ToolFailed {
            program: program.clone(),
            code,
        }
        .into()),
        None => Err(EcwError::ToolTerminated {
            program: program.clone(),
        }
        .into()),
    }
}
