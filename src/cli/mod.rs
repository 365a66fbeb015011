mod config_file;
mod ignore_file;
mod init;
mod install;
mod ping;
mod prettify;
mod script;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::Result;
use crate::project::ProjectContext;
use crate::templates::ConfigTemplate;

#[derive(Parser)]
#[command(name = "prettier-scaffold")]
#[command(about = "Scaffold and run Prettier for a Node-style project")]
#[command(version)]
pub struct Cli {
    /// Starting directory for locating the project's package.json
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub cwd: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create .prettierrc.js in the project root
    CreateConfigFile {
        /// Config template to re-export
        #[arg(short, long, value_enum, default_value = "base")]
        config: ConfigTemplate,
    },

    /// Create .prettierignore in the project root
    CreateIgnoreFile,

    /// Install prettier and the shared config as dev dependencies
    InstallDeps,

    /// Add a "prettify" script to package.json
    AddScriptToPackageJson,

    /// Install deps, create both files, and register the script
    Init {
        /// Config template to re-export
        #[arg(short, long, value_enum, default_value = "base")]
        config: ConfigTemplate,
    },

    /// Run prettier over the project's source files
    Prettify {
        /// Extra arguments forwarded to prettier
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print a short command summary
    H,

    /// Check that subprocess spawning works
    Ping,

    #[command(external_subcommand)]
    External(Vec<OsString>),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let Some(command) = self.command else {
            print_summary();
            return Ok(());
        };

        match command {
            Commands::CreateConfigFile { config } => {
                let ctx = ProjectContext::locate(&self.cwd)?;
                config_file::run(&ctx, config)
            }
            Commands::CreateIgnoreFile => {
                let ctx = ProjectContext::locate(&self.cwd)?;
                ignore_file::run(&ctx)
            }
            Commands::InstallDeps => {
                let ctx = ProjectContext::locate(&self.cwd)?;
                install::run(&ctx)
            }
            Commands::AddScriptToPackageJson => {
                let ctx = ProjectContext::locate(&self.cwd)?;
                script::run(&ctx)
            }
            Commands::Init { config } => {
                let ctx = ProjectContext::locate(&self.cwd)?;
                init::run(&ctx, config)
            }
            Commands::Prettify { args } => {
                let ctx = ProjectContext::locate(&self.cwd)?;
                prettify::run(&ctx, &args)
            }
            Commands::H => {
                print_summary();
                Ok(())
            }
            Commands::Ping => {
                let ctx = ProjectContext::locate(&self.cwd)?;
                ping::run(&ctx)
            }
            Commands::External(args) => {
                // Unknown verbs are reported but never fatal
                let verb = args
                    .first()
                    .map(|a| a.to_string_lossy().into_owned())
                    .unwrap_or_default();
                eprintln!("Unknown command: {}", verb);
                Ok(())
            }
        }
    }
}

fn print_summary() {
    println!(
        "Commands:
install-deps
create-config-file
create-ignore-file
add-script-to-package-json
init (all of the above together)
prettify [prettier args...]
ping
h"
    );
}
