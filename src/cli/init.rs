use super::{config_file, ignore_file, install, script};
use crate::Result;
use crate::project::ProjectContext;
use crate::templates::ConfigTemplate;

/// Full setup: install deps, create both files, register the script.
///
/// Steps run strictly in order; an error in an early step skips the rest.
pub fn run(ctx: &ProjectContext, config: ConfigTemplate) -> Result<()> {
    install::run(ctx)?;
    config_file::run(ctx, config)?;
    ignore_file::run(ctx)?;
    script::run(ctx)
}
