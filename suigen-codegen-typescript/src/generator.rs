//! TypeScript binding generator.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use eyre::{Result, WrapErr, bail};
use indexmap::IndexMap;
use rayon::prelude::*;
use suigen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use suigen_core::GeneratedFile;
use suigen_ir::Package;
use tracing::{debug, info};

use crate::{
    files::{IndexTs, PackageAbiTs},
    naming,
};

/// One package ready for rendering.
#[derive(Debug)]
struct PackageUnit {
    name: String,
    package: Package,
    /// Module map as pretty JSON, embedded verbatim as the ABI constant.
    abi_json: String,
}

impl PackageUnit {
    fn file<'a>(&'a self, generated_at: &'a str) -> PackageAbiTs<'a> {
        PackageAbiTs::new(&self.name, &self.package, &self.abi_json, generated_at)
    }
}

/// Generates `{package}.abi.ts` for every package plus an `index.ts` that
/// re-exports them all.
#[derive(Debug)]
pub struct Generator {
    units: Vec<PackageUnit>,
    generated_at: String,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    /// Prepare packages for generation.
    ///
    /// A package without modules is rejected. When a name repeats, the later
    /// package replaces the earlier one.
    pub fn new(packages: impl IntoIterator<Item = (String, Package)>) -> Result<Self> {
        let mut named: IndexMap<String, Package> = IndexMap::new();
        for (name, package) in packages {
            if package.is_empty() {
                bail!("package `{}` ({}) has no modules", name, package.address);
            }
            named.insert(name, package);
        }

        if named.is_empty() {
            bail!("no packages to generate");
        }

        let units = named
            .into_iter()
            .map(|(name, package)| {
                let abi_json = serde_json::to_string_pretty(&package.modules)
                    .wrap_err_with(|| format!("failed to serialize ABI of `{}`", name))?;
                Ok(PackageUnit {
                    name,
                    package,
                    abi_json,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            units,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Override the timestamp written into file headers.
    pub fn generated_at(mut self, timestamp: impl Into<String>) -> Self {
        self.generated_at = timestamp.into();
        self
    }

    /// Packages in generation order.
    pub fn packages(&self) -> impl Iterator<Item = (&str, &Package)> {
        self.units
            .iter()
            .map(|unit| (unit.name.as_str(), &unit.package))
    }

    fn index(&self) -> IndexTs<'_> {
        IndexTs::new(
            self.units.iter().map(|unit| unit.name.as_str()),
            &self.generated_at,
        )
    }

    /// Preview generated files without writing to disk.
    fn preview_files(&self) -> Vec<PreviewFile> {
        let mut files: Vec<PreviewFile> = self
            .units
            .par_iter()
            .map(|unit| {
                debug!(package = %unit.name, modules = unit.package.modules.len(), "rendering bindings");
                PreviewFile {
                    path: naming::abi_file_name(&unit.name),
                    content: unit.file(&self.generated_at).render(),
                }
            })
            .collect();

        files.push(PreviewFile {
            path: "index.ts".to_string(),
            content: self.index().render(),
        });

        files
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut written = self
            .units
            .par_iter()
            .map(|unit| {
                debug!(package = %unit.name, modules = unit.package.modules.len(), "rendering bindings");
                let file = unit.file(&self.generated_at);
                let path = file.path(output_dir);
                file.write(output_dir)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote bindings");
                Ok(path)
            })
            .collect::<Result<Vec<_>>>()?;

        let index = self.index();
        let path = index.path(output_dir);
        index
            .write(output_dir)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote index");
        written.push(path);

        Ok(GenerateResult { written })
    }
}

#[cfg(test)]
mod tests {
    use suigen_ir::{Function, Module};

    use super::*;

    fn package(address: &str, module: &str) -> Package {
        Package::new(address, Default::default())
            .with_module(Module::new(module).with_function("run", Function::new()))
    }

    #[test]
    fn test_rejects_empty_package() {
        let err = Generator::new([("empty".to_string(), Package::new("0x1", Default::default()))])
            .unwrap_err();
        assert!(err.to_string().contains("`empty`"));
    }

    #[test]
    fn test_rejects_no_packages() {
        assert!(Generator::new(Vec::<(String, Package)>::new()).is_err());
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let generator = Generator::new([
            ("a".to_string(), package("0x1", "first")),
            ("b".to_string(), package("0x2", "other")),
            ("a".to_string(), package("0x3", "second")),
        ])
        .unwrap();

        let packages: Vec<(&str, &str)> = generator
            .packages()
            .map(|(name, package)| (name, package.address.as_str()))
            .collect();
        assert_eq!(packages, [("a", "0x3"), ("b", "0x2")]);
    }

    #[test]
    fn test_preview_lists_packages_then_index() {
        let generator = Generator::new([
            ("b".to_string(), package("0x1", "m")),
            ("a".to_string(), package("0x2", "m")),
        ])
        .unwrap()
        .generated_at("fixed");

        let paths: Vec<String> = generator.preview().into_iter().map(|f| f.path).collect();
        assert_eq!(paths, ["b.abi.ts", "a.abi.ts", "index.ts"]);
        assert_eq!(generator.language(), "typescript");
        assert_eq!(generator.file_extension(), "ts");
    }

    #[test]
    fn test_package_file_borrows_unit_and_timestamp() {
        let generator = Generator::new([("pkg".to_string(), package("0x1", "m"))])
            .unwrap()
            .generated_at("2024-01-01T00:00:00.000Z");

        let files = generator.preview();
        assert_eq!(files[0].path, "pkg.abi.ts");
        assert!(files[0].content.contains(" * Generated at: 2024-01-01T00:00:00.000Z\n"));
        assert!(files[0].content.contains("export const pkgPackage = {"));
    }

    #[test]
    fn test_default_timestamp_is_utc_millis() {
        let generator = Generator::new([("a".to_string(), package("0x1", "m"))]).unwrap();
        assert!(generator.generated_at.ends_with('Z'));
        assert_eq!(generator.generated_at.len(), "2024-01-01T00:00:00.000Z".len());
    }
}
