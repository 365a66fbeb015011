use serde_json::{Map, Value};

use crate::project::ProjectContext;
use crate::{Error, Result};

/// In-memory package.json, edited in place and written back whole.
///
/// The document is kept untyped (`Map<String, Value>`) because the only
/// contract is a get/set over dotted key paths; everything the project put in
/// its manifest is carried through unchanged, in its original key order.
#[derive(Debug, Clone)]
pub struct PackageJson {
    path: std::path::PathBuf,
    data: Map<String, Value>,
}

impl PackageJson {
    /// Read and parse the manifest of a located project.
    pub fn load(ctx: &ProjectContext) -> Result<Self> {
        let content = std::fs::read_to_string(&ctx.manifest_path).map_err(|e| Error::FileRead {
            path: ctx.manifest_path.clone(),
            source: e,
        })?;

        let data: Map<String, Value> =
            serde_json::from_str(&content).map_err(|e| Error::ManifestParse {
                path: ctx.manifest_path.clone(),
                source: e,
            })?;

        Ok(Self {
            path: ctx.manifest_path.clone(),
            data,
        })
    }

    /// Look up a value at a dotted key path, e.g. `scripts.prettify`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.data.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Set the value at a dotted key path, creating intermediate objects as
    /// needed. Sibling keys of every level are left untouched.
    pub fn set(&mut self, path: &str, value: Value) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let leaf = match segments.pop() {
            Some(leaf) => leaf,
            None => return,
        };

        let mut map = &mut self.data;
        for segment in segments {
            let slot = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            map = slot
                .as_object_mut()
                .expect("intermediate level was just made an object");
        }
        map.insert(leaf.to_string(), value);
    }

    /// Serialize the whole document back to disk, pretty-printed with a
    /// trailing newline. Last-writer-wins with respect to external edits.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&Value::Object(self.data.clone())).map_err(
            |e| Error::ManifestParse {
                path: self.path.clone(),
                source: e,
            },
        )?;

        std::fs::write(&self.path, content + "\n").map_err(|e| Error::FileWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn ctx_with_manifest(content: &str) -> (tempfile::TempDir, ProjectContext) {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("package.json"), content).unwrap();
        let ctx = ProjectContext::locate(temp_dir.path()).unwrap();
        (temp_dir, ctx)
    }

    #[test]
    fn test_get_dotted_path() {
        let (_tmp, ctx) = ctx_with_manifest(r#"{"scripts": {"test": "vitest"}}"#);
        let manifest = PackageJson::load(&ctx).unwrap();

        assert_eq!(
            manifest.get("scripts.test"),
            Some(&Value::String("vitest".to_string()))
        );
        assert_eq!(manifest.get("scripts.prettify"), None);
        assert_eq!(manifest.get("nope.nothing"), None);
    }

    #[test]
    fn test_set_creates_intermediate_levels() {
        let (_tmp, ctx) = ctx_with_manifest(r#"{"name": "demo"}"#);
        let mut manifest = PackageJson::load(&ctx).unwrap();

        manifest.set("scripts.prettify", Value::String("prettier-scaffold prettify".into()));

        assert_eq!(
            manifest.get("scripts.prettify"),
            Some(&Value::String("prettier-scaffold prettify".to_string()))
        );
        assert_eq!(manifest.get("name"), Some(&Value::String("demo".to_string())));
    }

    #[test]
    fn test_set_preserves_sibling_scripts() {
        let (_tmp, ctx) = ctx_with_manifest(
            r#"{"name": "demo", "scripts": {"build": "tsc", "test": "vitest"}}"#,
        );
        let mut manifest = PackageJson::load(&ctx).unwrap();

        manifest.set("scripts.prettify", Value::String("prettier-scaffold prettify".into()));
        manifest.save().unwrap();

        let manifest = PackageJson::load(&ctx).unwrap();
        assert_eq!(manifest.get("scripts.build"), Some(&Value::String("tsc".to_string())));
        assert_eq!(manifest.get("scripts.test"), Some(&Value::String("vitest".to_string())));
        assert_eq!(
            manifest.get("scripts.prettify"),
            Some(&Value::String("prettier-scaffold prettify".to_string()))
        );
    }

    #[test]
    fn test_save_preserves_key_order() {
        let (_tmp, ctx) = ctx_with_manifest(
            r#"{"name": "demo", "version": "1.0.0", "scripts": {"z": "1", "a": "2"}}"#,
        );
        let mut manifest = PackageJson::load(&ctx).unwrap();
        manifest.set("scripts.prettify", Value::String("x".into()));
        manifest.save().unwrap();

        let written = fs::read_to_string(&ctx.manifest_path).unwrap();
        let name_pos = written.find("\"name\"").unwrap();
        let version_pos = written.find("\"version\"").unwrap();
        let z_pos = written.find("\"z\"").unwrap();
        let a_pos = written.find("\"a\"").unwrap();
        assert!(name_pos < version_pos);
        assert!(z_pos < a_pos);
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_load_malformed_manifest() {
        let (_tmp, ctx) = ctx_with_manifest("{ not json");

        let result = PackageJson::load(&ctx);
        assert!(matches!(result, Err(Error::ManifestParse { .. })));
    }

    #[test]
    fn test_load_non_object_manifest() {
        let (_tmp, ctx) = ctx_with_manifest("[1, 2, 3]");

        let result = PackageJson::load(&ctx);
        assert!(matches!(result, Err(Error::ManifestParse { .. })));
    }
}
