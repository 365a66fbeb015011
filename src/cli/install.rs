use crate::Result;
use crate::process;
use crate::project::ProjectContext;
use crate::templates::CONFIG_PACKAGE;

/// Install prettier and the shared config package as dev dependencies.
///
/// A non-zero exit from pnpm is reported but not fatal; a spawn failure
/// (pnpm missing entirely) is.
pub fn run(ctx: &ProjectContext) -> Result<()> {
    println!("Installing dependencies...");

    let spec = format!("{}@latest", CONFIG_PACKAGE);
    let status = process::run(&ctx.root, "pnpm", &["i", "-D", spec.as_str(), "prettier"])?;

    if status.success() {
        println!("{}: dependencies installed", ctx.manifest_path.display());
    } else {
        eprintln!("pnpm install exited with code {}", status.code().unwrap_or(1));
    }

    Ok(())
}
