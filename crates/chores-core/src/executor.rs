//! Process execution helpers.
//!
//! Plain synchronous wrappers around `std::process::Command`. Task success
//! is decided by the caller from the exit code, so the code has to be
//! accurate even for signal-terminated children: a non-zero exit is an
//! `Ok` code here, never an error. [`ExecError`] only covers failing to
//! start or wait on the process itself.

use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run a program with inherited stdio, announcing it on stdout first.
pub fn run(program: &str, args: &[&str]) -> Result<i32, ExecError> {
    println!("  Running: {} {}", program, args.join(" "));
    run_silent(program, args)
}

/// Run a command line through the shell, announcing it on stdout first.
pub fn run_shell(cmdline: &str) -> Result<i32, ExecError> {
    println!("  Running: {cmdline}");
    run_shell_silent(cmdline)
}

/// Run a program with inherited stdio and return its exit code.
pub fn run_silent(program: &str, args: &[&str]) -> Result<i32, ExecError> {
    debug!(program, ?args, "spawning process");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;
    Ok(exit_code(status))
}

/// Run a command line through `sh -c` and return its exit code.
pub fn run_shell_silent(cmdline: &str) -> Result<i32, ExecError> {
    run_silent("sh", &["-c", cmdline])
}

/// Run a program and return its captured stdout together with the exit
/// code. Output is decoded lossily; stderr is not captured.
pub fn capture(program: &str, args: &[&str]) -> Result<(String, i32), ExecError> {
    debug!(program, ?args, "capturing process output");
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    Ok((stdout, exit_code(output.status)))
}

/// Exit code of a finished child. A signal-terminated child reports
/// `128 + signal`, matching shell conventions.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(-1)
}
