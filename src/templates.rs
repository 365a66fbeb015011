use std::path::Path;

use crate::Result;
use crate::project::ProjectContext;

/// Generated formatter config filename.
pub const CONFIG_FILENAME: &str = ".prettierrc.js";

/// Generated ignore filename.
pub const IGNORE_FILENAME: &str = ".prettierignore";

/// The npm package whose shared configs the generated file re-exports.
pub const CONFIG_PACKAGE: &str = "prettier-scaffold-config";

/// Bundled ignore asset, written verbatim. Unlike the config file there is no
/// per-name selection here: every project gets the same ignore list.
const IGNORE_TEMPLATE: &str = "\
node_modules
dist
build
coverage
.next
.turbo
pnpm-lock.yaml
package-lock.json
yarn.lock
CHANGELOG.md
";

/// Config presets bundled with the tool. Parsed by clap at the command
/// boundary, so an invalid name never reaches file I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ConfigTemplate {
    /// Stock shared config.
    #[default]
    Base,
}

impl ConfigTemplate {
    pub fn name(self) -> &'static str {
        match self {
            ConfigTemplate::Base => "base",
        }
    }
}

/// Result of a skip-if-present file creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Write `.prettierrc.js` into the project root, re-exporting the chosen
/// shared config. A pre-existing file is left untouched.
pub fn create_config_file(ctx: &ProjectContext, template: ConfigTemplate) -> Result<CreateOutcome> {
    let path = ctx.root.join(CONFIG_FILENAME);
    if path.exists() {
        return Ok(CreateOutcome::AlreadyExists);
    }

    let content = format!(
        "/** @type {{import(\"prettier\").Config}} */\nmodule.exports = {{\n  ...require('{}/configs/{}'),\n}}\n",
        CONFIG_PACKAGE,
        template.name()
    );

    write_new(&path, &content)?;
    Ok(CreateOutcome::Created)
}

/// Write `.prettierignore` into the project root from the bundled asset. A
/// pre-existing file is left untouched.
pub fn create_ignore_file(ctx: &ProjectContext) -> Result<CreateOutcome> {
    let path = ctx.root.join(IGNORE_FILENAME);
    if path.exists() {
        return Ok(CreateOutcome::AlreadyExists);
    }

    write_new(&path, IGNORE_TEMPLATE)?;
    Ok(CreateOutcome::Created)
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| crate::Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project() -> (tempfile::TempDir, ProjectContext) {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("package.json"), "{}").unwrap();
        let ctx = ProjectContext::locate(temp_dir.path()).unwrap();
        (temp_dir, ctx)
    }

    #[test]
    fn test_create_config_file() {
        let (_tmp, ctx) = project();

        let outcome = create_config_file(&ctx, ConfigTemplate::Base).unwrap();
        assert_eq!(outcome, CreateOutcome::Created);

        let content = fs::read_to_string(ctx.root.join(CONFIG_FILENAME)).unwrap();
        assert!(content.contains("prettier-scaffold-config/configs/base"));
        assert!(content.starts_with("/** @type"));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn test_create_config_file_is_idempotent() {
        let (_tmp, ctx) = project();

        create_config_file(&ctx, ConfigTemplate::Base).unwrap();
        let first = fs::read_to_string(ctx.root.join(CONFIG_FILENAME)).unwrap();

        let outcome = create_config_file(&ctx, ConfigTemplate::Base).unwrap();
        assert_eq!(outcome, CreateOutcome::AlreadyExists);

        let second = fs::read_to_string(ctx.root.join(CONFIG_FILENAME)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_create_config_file_keeps_existing_content() {
        let (_tmp, ctx) = project();
        fs::write(ctx.root.join(CONFIG_FILENAME), "module.exports = {}\n").unwrap();

        let outcome = create_config_file(&ctx, ConfigTemplate::Base).unwrap();
        assert_eq!(outcome, CreateOutcome::AlreadyExists);

        let content = fs::read_to_string(ctx.root.join(CONFIG_FILENAME)).unwrap();
        assert_eq!(content, "module.exports = {}\n");
    }

    #[test]
    fn test_create_ignore_file() {
        let (_tmp, ctx) = project();

        let outcome = create_ignore_file(&ctx).unwrap();
        assert_eq!(outcome, CreateOutcome::Created);

        let content = fs::read_to_string(ctx.root.join(IGNORE_FILENAME)).unwrap();
        assert!(content.contains("node_modules"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_create_ignore_file_is_idempotent() {
        let (_tmp, ctx) = project();

        create_ignore_file(&ctx).unwrap();
        let outcome = create_ignore_file(&ctx).unwrap();
        assert_eq!(outcome, CreateOutcome::AlreadyExists);
    }
}
