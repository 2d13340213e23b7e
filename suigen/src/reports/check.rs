//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration and snapshot validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Network the package ids came from.
    pub network: Option<String>,
    /// One entry per loaded package.
    pub packages: Vec<PackageSummary>,
}

/// Counts for one loaded package.
#[derive(Debug)]
pub struct PackageSummary {
    pub name: String,
    pub id: String,
    pub modules: usize,
    pub structs: usize,
    pub functions: usize,
}

fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        if let Some(network) = &self.network {
            out.key_value("  network", network);
        }
        out.newline();

        out.section(&format!("  {}", plural(self.packages.len(), "package")));
        for package in &self.packages {
            out.list_item(
                1,
                &format!(
                    "{} ({}): {}, {}, {}",
                    package.name,
                    package.id,
                    plural(package.modules, "module"),
                    plural(package.structs, "struct"),
                    plural(package.functions, "function"),
                ),
            );
        }
    }
}
