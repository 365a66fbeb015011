use crate::Result;
use crate::process;
use crate::project::ProjectContext;

/// Spawn a trivial echo in the project root to confirm subprocesses work.
pub fn run(ctx: &ProjectContext) -> Result<()> {
    let status = process::run(&ctx.root, "echo", &["pong"])?;
    if !status.success() {
        eprintln!("echo exited with code {}", status.code().unwrap_or(1));
    }
    Ok(())
}
