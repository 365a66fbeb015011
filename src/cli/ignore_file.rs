use crate::Result;
use crate::project::ProjectContext;
use crate::templates::{self, CreateOutcome, IGNORE_FILENAME};

/// Create the prettier ignore file in the project root.
pub fn run(ctx: &ProjectContext) -> Result<()> {
    println!("Creating prettier ignore file...");

    let path = ctx.root.join(IGNORE_FILENAME);
    match templates::create_ignore_file(ctx)? {
        CreateOutcome::Created => {
            println!("{}: prettier ignore file created", path.display());
        }
        CreateOutcome::AlreadyExists => {
            println!("{}: prettier ignore file already exists", path.display());
        }
    }

    Ok(())
}
