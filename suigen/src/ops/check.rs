//! Check operation - configuration and snapshot validation.

use std::path::Path;

use suigen_manifest::{Manifest, Result, SchemaSource};

use super::load_packages;
use crate::reports::{CheckReport, PackageSummary};

/// Execute the check operation.
///
/// Resolves the packages for `network` and loads every snapshot. The first
/// failure is returned as a manifest error.
pub fn check(
    manifest: &Manifest,
    config_path: &Path,
    network: Option<&str>,
    source: &dyn SchemaSource,
) -> Result<CheckReport> {
    let loaded = load_packages(manifest, network, source)?;

    let packages = loaded
        .packages
        .iter()
        .map(|(name, id, package)| PackageSummary {
            name: name.clone(),
            id: id.clone(),
            modules: package.modules.len(),
            structs: package.structs().count(),
            functions: package
                .modules
                .values()
                .map(|module| module.exposed_functions.len())
                .sum(),
        })
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        network: loaded.network,
        packages,
    })
}
