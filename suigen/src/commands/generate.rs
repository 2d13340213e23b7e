use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ConfigArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions, load::snapshot_dir},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory (defaults to generator.output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = self.config.open();
        let loaded = ops::load_packages(
            file.manifest(),
            self.config.network.as_deref(),
            &snapshot_dir(&file),
        )
        .unwrap_or_exit();

        let output_dir = ops::load::output_dir(&file, self.output.as_deref());
        let network = loaded.network.clone();
        let report = ops::generate(
            loaded.into_named(),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                network: network.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
