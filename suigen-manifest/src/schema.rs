//! Loading package schemas from snapshot files.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use suigen_ir::{Module, Package};
use tracing::debug;

use crate::{Error, PackageConfig, Result, error::SourceContext};

/// Provides the normalized schema of a configured package.
pub trait SchemaSource {
    fn load(&self, package: &PackageConfig) -> Result<Package>;
}

/// Reads `{root}/{name}.json`, or the entry's explicit schema path.
///
/// Snapshots hold the module map returned by `getNormalizedMoveModulesByPackage`.
#[derive(Debug, Clone)]
pub struct SnapshotDir {
    root: PathBuf,
    base: Option<PathBuf>,
}

impl SnapshotDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            base: None,
        }
    }

    /// Directory that relative explicit schema paths are resolved against.
    pub fn base(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base = Some(dir.into());
        self
    }

    /// Snapshot location for a package.
    pub fn path_for(&self, package: &PackageConfig) -> PathBuf {
        match (&package.schema, &self.base) {
            (Some(path), Some(base)) if path.is_relative() => base.join(path),
            (Some(path), _) => path.clone(),
            (None, _) => self.root.join(format!("{}.json", package.name)),
        }
    }
}

impl SchemaSource for SnapshotDir {
    fn load(&self, package: &PackageConfig) -> Result<Package> {
        let path = self.path_for(package);
        debug!(package = %package.name, path = %path.display(), "loading schema snapshot");

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;

        parse_snapshot(package, &content, &path)
    }
}

/// Parse snapshot JSON into a package addressed by the configured id.
pub fn parse_snapshot(package: &PackageConfig, content: &str, path: &Path) -> Result<Package> {
    let modules: IndexMap<String, Module> = serde_json::from_str(content).map_err(|e| {
        SourceContext::new(content, path.display().to_string()).schema_error(&package.name, e)
    })?;

    if modules.is_empty() {
        return Err(Box::new(Error::EmptyPackage {
            package: package.name.clone(),
            path: path.to_path_buf(),
        }));
    }

    Ok(Package::new(&package.id, modules))
}
