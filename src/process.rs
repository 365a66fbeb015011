use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

use crate::{Error, Result};

/// Spawn `program` with `args` in `cwd` and wait for it. The child inherits
/// this process's stdio, so its output goes straight to the user's terminal.
pub fn run<S: AsRef<OsStr>>(cwd: &Path, program: &str, args: &[S]) -> Result<ExitStatus> {
    let command = render_command(program, args);
    debug!(cwd = %cwd.display(), %command, "spawning");

    Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|e| Error::Spawn { command, source: e })
}

/// Like [`run`], but a non-zero exit is fatal: the error carries the child's
/// exit code for `main` to propagate.
pub fn run_checked<S: AsRef<OsStr>>(cwd: &Path, program: &str, args: &[S]) -> Result<()> {
    let status = run(cwd, program, args)?;
    if status.success() {
        return Ok(());
    }
    Err(Error::CommandFailed {
        command: render_command(program, args),
        code: status.code().unwrap_or(1),
    })
}

fn render_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
    parts.join(" ")
}
