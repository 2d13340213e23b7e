use clap::Args;
use eyre::Result;

use super::{ConfigArgs, UnwrapOrExit};
use crate::{
    ops::{self, load::snapshot_dir},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = self.config.open();
        let report = ops::check(
            file.manifest(),
            file.path(),
            self.config.network.as_deref(),
            &snapshot_dir(&file),
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
