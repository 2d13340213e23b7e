//! Resolve configured packages and load their schemas.

use std::path::{Path, PathBuf};

use suigen_ir::Package;
use suigen_manifest::{Manifest, Result, SchemaSource, SnapshotDir, SuigenToml};
use tracing::debug;

/// Packages resolved for one run, in manifest order.
#[derive(Debug)]
pub struct LoadedPackages {
    /// Network the package ids were taken from.
    pub network: Option<String>,
    /// `(name, id, package)` per configured package.
    pub packages: Vec<(String, String, Package)>,
}

impl LoadedPackages {
    /// Name and package pairs, as the generator takes them.
    pub fn into_named(self) -> Vec<(String, Package)> {
        self.packages
            .into_iter()
            .map(|(name, _, package)| (name, package))
            .collect()
    }
}

/// Snapshot directory of `file`, resolved next to the file itself.
pub fn snapshot_dir(file: &SuigenToml) -> SnapshotDir {
    let source = SnapshotDir::new(file.resolve(&file.manifest().generator.schemas));
    match file.path().parent() {
        Some(dir) => source.base(dir),
        None => source,
    }
}

/// Load every package configured for `network` from `source`.
pub fn load_packages(
    manifest: &Manifest,
    network: Option<&str>,
    source: &dyn SchemaSource,
) -> Result<LoadedPackages> {
    let network = manifest.network(network).map(str::to_string);
    let configs = manifest.packages_for(network.as_deref())?;

    let mut packages = Vec::with_capacity(configs.len());
    for config in configs {
        debug!(package = %config.name, id = %config.id, "loading package");
        let package = source.load(&config)?;
        packages.push((config.name, config.id, package));
    }

    Ok(LoadedPackages { network, packages })
}

/// Output directory: the flag if given, else `generator.output` next to the file.
pub fn output_dir(file: &SuigenToml, flag: Option<&Path>) -> PathBuf {
    match flag {
        Some(dir) => dir.to_path_buf(),
        None => file.resolve(&file.manifest().generator.output),
    }
}
