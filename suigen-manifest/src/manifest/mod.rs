//! Manifest types and parsing for suigen.toml files.

mod file;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
pub use file::SuigenToml;
pub use validate::ParseContext;

use crate::{Error, Result};

/// Root manifest for suigen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output locations and defaults
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Packages generated on every network
    #[serde(default)]
    pub packages: IndexMap<String, PackageEntry>,

    /// Per-network package tables
    #[serde(default)]
    pub networks: IndexMap<String, NetworkConfig>,
}

/// `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the bindings are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Directory holding `{name}.json` schema snapshots
    #[serde(default = "default_schemas")]
    pub schemas: PathBuf,

    /// Network selected when none is given on the command line
    #[serde(default)]
    pub network: Option<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("src/abi")
}

fn default_schemas() -> PathBuf {
    PathBuf::from("schemas")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            schemas: default_schemas(),
            network: None,
        }
    }
}

/// A package entry: either a bare id or a table with an explicit snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PackageEntry {
    Id(String),
    Detailed {
        id: String,
        #[serde(default)]
        schema: Option<PathBuf>,
    },
}

impl PackageEntry {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::Detailed { id, .. } => id,
        }
    }

    pub fn schema(&self) -> Option<&Path> {
        match self {
            Self::Id(_) => None,
            Self::Detailed { schema, .. } => schema.as_deref(),
        }
    }
}

/// `[networks.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    #[serde(default)]
    pub packages: IndexMap<String, PackageEntry>,
}

/// A package resolved for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    pub name: String,
    pub id: String,
    /// Explicit snapshot path, if the entry named one
    pub schema: Option<PathBuf>,
}

impl PackageConfig {
    fn from_entry(name: &str, entry: &PackageEntry) -> Self {
        Self {
            name: name.to_string(),
            id: entry.id().to_string(),
            schema: entry.schema().map(Path::to_path_buf),
        }
    }
}

impl Manifest {
    /// Resolve the network to use: the explicit one, else the configured default.
    pub fn network<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or(self.generator.network.as_deref())
    }

    /// Packages to generate for `network`.
    ///
    /// Network entries replace same-named `[packages]` entries and append new
    /// ones after them.
    pub fn packages_for(&self, network: Option<&str>) -> Result<Vec<PackageConfig>> {
        let mut entries: IndexMap<&str, &PackageEntry> = self
            .packages
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
            .collect();

        if let Some(name) = self.network(network) {
            let config = self.networks.get(name).ok_or_else(|| {
                Box::new(Error::UnknownNetwork {
                    name: name.to_string(),
                    available: self.network_names(),
                })
            })?;
            for (package, entry) in &config.packages {
                entries.insert(package.as_str(), entry);
            }
        }

        if entries.is_empty() {
            return Err(Box::new(Error::NoPackages));
        }

        Ok(entries
            .into_iter()
            .map(|(name, entry)| PackageConfig::from_entry(name, entry))
            .collect())
    }

    fn network_names(&self) -> String {
        if self.networks.is_empty() {
            return "(none)".to_string();
        }
        self.networks
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MULTI_NETWORK: &str = r#"
[generator]
output = "app/abi"
network = "testnet"

[packages]
counter = "0x1"
registry = { id = "0x2", schema = "snapshots/registry.json" }

[networks.testnet.packages]
counter = "0xa"

[networks.mainnet.packages]
counter = "0xb"
vault = "0xc"
"#;

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str("[packages]\ncounter = \"0x1\"\n").unwrap();
        assert_eq!(manifest.generator.output, PathBuf::from("src/abi"));
        assert_eq!(manifest.generator.schemas, PathBuf::from("schemas"));
        assert_eq!(manifest.network(None), None);

        let packages = manifest.packages_for(None).unwrap();
        assert_eq!(
            packages,
            [PackageConfig {
                name: "counter".to_string(),
                id: "0x1".to_string(),
                schema: None,
            }]
        );
    }

    #[test]
    fn test_default_network_overrides_packages() {
        let manifest = Manifest::from_str(MULTI_NETWORK).unwrap();
        let packages = manifest.packages_for(None).unwrap();

        let ids: Vec<(&str, &str)> = packages
            .iter()
            .map(|p| (p.name.as_str(), p.id.as_str()))
            .collect();
        assert_eq!(ids, [("counter", "0xa"), ("registry", "0x2")]);
        assert_eq!(
            packages[1].schema.as_deref(),
            Some(Path::new("snapshots/registry.json"))
        );
    }

    #[test]
    fn test_explicit_network_appends_new_packages() {
        let manifest = Manifest::from_str(MULTI_NETWORK).unwrap();
        let names: Vec<String> = manifest
            .packages_for(Some("mainnet"))
            .unwrap()
            .into_iter()
            .map(|p| format!("{}={}", p.name, p.id))
            .collect();
        assert_eq!(names, ["counter=0xb", "registry=0x2", "vault=0xc"]);
    }

    #[test]
    fn test_unknown_network() {
        let manifest = Manifest::from_str(MULTI_NETWORK).unwrap();
        let err = manifest.packages_for(Some("devnet")).unwrap_err();
        match *err {
            Error::UnknownNetwork { name, available } => {
                assert_eq!(name, "devnet");
                assert_eq!(available, "testnet, mainnet");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_packages_keep_file_order() {
        let manifest = Manifest::from_str(
            "[packages]\nzeta = \"0x1\"\nalpha = \"0x2\"\n\n[networks.zeta]\n[networks.alpha]\n",
        )
        .unwrap();
        let names: Vec<String> = manifest
            .packages_for(None)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["zeta", "alpha"]);

        let err = manifest.packages_for(Some("beta")).unwrap_err();
        match *err {
            Error::UnknownNetwork { available, .. } => assert_eq!(available, "zeta, alpha"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_packages() {
        let manifest = Manifest::from_str("[networks.testnet]\n").unwrap();
        assert!(matches!(
            *manifest.packages_for(Some("testnet")).unwrap_err(),
            Error::NoPackages
        ));
    }
}
