use crate::Result;
use crate::process;
use crate::project::ProjectContext;

/// Glob of tracked source files, expanded by prettier itself.
const SOURCE_GLOB: &str = "./**/*.{ts,tsx,js,json,yml,scss}";

/// Run prettier over the project, failing fast on a non-zero exit.
pub fn run(ctx: &ProjectContext, extra: &[String]) -> Result<()> {
    let mut args = vec![
        "prettier".to_string(),
        "--log-level".to_string(),
        "warn".to_string(),
        "--cache".to_string(),
        "--write".to_string(),
        SOURCE_GLOB.to_string(),
    ];
    args.extend(extra.iter().cloned());

    process::run_checked(&ctx.root, "pnpm", &args)
}
