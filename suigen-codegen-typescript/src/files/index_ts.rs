//! `index.ts` aggregator generator.

use std::path::{Path, PathBuf};

use suigen_core::GeneratedFile;

use crate::{
    ast::Export,
    code_file::{CodeFile, Section},
    naming,
};

/// Re-exports every package's bindings from one module.
pub struct IndexTs<'a> {
    packages: Vec<&'a str>,
    generated_at: &'a str,
}

impl<'a> IndexTs<'a> {
    pub fn new(packages: impl IntoIterator<Item = &'a str>, generated_at: &'a str) -> Self {
        Self {
            packages: packages.into_iter().collect(),
            generated_at,
        }
    }
}

impl GeneratedFile for IndexTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn render(&self) -> String {
        let star = self
            .packages
            .iter()
            .map(|name| Export::new().from(naming::abi_module_path(name)));
        let named = self.packages.iter().map(|name| {
            Export::new()
                .from(naming::abi_module_path(name))
                .named(naming::package_const_name(name))
        });

        CodeFile::new()
            .header(super::header(
                "Package ABI index".to_string(),
                self.generated_at,
            ))
            .add(
                Section::new("Re-export all types and utilities")
                    .compact()
                    .items(star),
            )
            .add(
                Section::new("Explicit re-exports for package objects")
                    .compact()
                    .items(named),
            )
            .render()
    }
}
