use serde_json::Value;

use crate::Result;
use crate::manifest::PackageJson;
use crate::project::ProjectContext;

/// Dotted path of the registered script entry.
pub const SCRIPT_KEY: &str = "scripts.prettify";

/// Invocation string written into the manifest.
pub const SCRIPT_VALUE: &str = "prettier-scaffold prettify";

/// Register the "prettify" script in package.json, only if absent.
pub fn run(ctx: &ProjectContext) -> Result<()> {
    println!("Adding \"prettify\" script to package.json...");

    let mut manifest = PackageJson::load(ctx)?;
    if manifest.get(SCRIPT_KEY).is_some() {
        println!(
            "{}: script \"prettify\" already exists",
            ctx.manifest_path.display()
        );
        return Ok(());
    }

    manifest.set(SCRIPT_KEY, Value::String(SCRIPT_VALUE.to_string()));
    manifest.save()?;
    println!("{}: script \"prettify\" added", ctx.manifest_path.display());

    Ok(())
}
