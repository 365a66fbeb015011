use crate::Result;
use crate::project::ProjectContext;
use crate::templates::{self, CONFIG_FILENAME, ConfigTemplate, CreateOutcome};

/// Create the prettier config file in the project root.
pub fn run(ctx: &ProjectContext, config: ConfigTemplate) -> Result<()> {
    println!("Creating prettier config file...");

    let path = ctx.root.join(CONFIG_FILENAME);
    match templates::create_config_file(ctx, config)? {
        CreateOutcome::Created => {
            println!("{}: prettier config file created", path.display());
        }
        CreateOutcome::AlreadyExists => {
            println!("{}: prettier config file already exists", path.display());
        }
    }

    Ok(())
}
