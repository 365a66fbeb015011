use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Result};

/// The project manifest filename.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Resolved location of the target project.
///
/// Built once per command run and passed by reference to every operation, so
/// all steps of a composite command agree on the same root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// Directory containing package.json.
    pub root: PathBuf,
    /// Absolute path of package.json itself.
    pub manifest_path: PathBuf,
}

impl ProjectContext {
    /// Walk upward from `start` until a directory containing package.json is
    /// found. Relative starting directories are joined onto the process
    /// current dir.
    pub fn locate(start: &Path) -> Result<Self> {
        let start = if start.is_absolute() {
            start.to_path_buf()
        } else {
            std::env::current_dir()?.join(start)
        };
        let start = start
            .canonicalize()
            .map_err(|_| Error::ManifestNotFound(start.clone()))?;

        let mut dir = start.as_path();
        loop {
            let candidate = dir.join(MANIFEST_FILENAME);
            if candidate.is_file() {
                debug!(root = %dir.display(), "located project root");
                return Ok(Self {
                    root: dir.to_path_buf(),
                    manifest_path: candidate,
                });
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Err(Error::ManifestNotFound(start)),
            }
        }
    }
}
