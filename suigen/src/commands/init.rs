use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use suigen_core::{File, FileRules, WriteResult};
use suigen_manifest::SuigenToml;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create suigen.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.dir.join("suigen.toml");
        let result = Self::write_template(&path)?;

        match result {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  add packages under [packages]");
                println!("  save each package's normalized modules to schemas/<name>.json");
                println!("  suigen generate");
            }
            WriteResult::Skipped => println!("{} already exists", path.display()),
        }

        Ok(())
    }

    fn write_template(path: &std::path::Path) -> Result<WriteResult> {
        File::new(path, SuigenToml::template())
            .with_rules(FileRules::create_once())
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))
    }
}
