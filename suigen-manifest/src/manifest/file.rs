use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Starter configuration written by `suigen init`.
const TEMPLATE: &str = r#"[generator]
output = "src/abi"
schemas = "schemas"

[packages]
# name = "0x<package id>"
# name = { id = "0x<package id>", schema = "path/to/snapshot.json" }

# [networks.testnet.packages]
# name = "0x<package id>"
"#;

/// Represents a suigen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct SuigenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl SuigenToml {
    /// Open and parse a suigen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Starter file content.
    pub fn template() -> &'static str {
        TEMPLATE
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve a path from the manifest against the directory holding the file.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        match self.path.parent() {
            Some(dir) if relative.is_relative() => dir.join(relative),
            _ => relative.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_template_parses() {
        let manifest = Manifest::from_str(SuigenToml::template()).unwrap();
        assert!(manifest.packages.is_empty());
        assert_eq!(manifest.generator.output, PathBuf::from("src/abi"));
    }

    #[test]
    fn test_open_and_resolve() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("suigen.toml");
        std::fs::write(&path, "[packages]\ncounter = \"0x1\"\n").unwrap();

        let file = SuigenToml::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert!(file.content().contains("counter"));
        assert_eq!(file.manifest().packages.len(), 1);
        assert_eq!(
            file.resolve(Path::new("schemas")),
            temp.path().join("schemas")
        );
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SuigenToml::open(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, crate::Error::Io { .. }));
    }
}
