use clap::Args;
use eyre::Result;

use super::{ConfigArgs, UnwrapOrExit};
use crate::{
    ops::{self, load::snapshot_dir},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.config.open();
        let loaded = ops::load_packages(
            file.manifest(),
            self.config.network.as_deref(),
            &snapshot_dir(&file),
        )
        .unwrap_or_exit();

        ops::list(&loaded.packages).render(&mut TerminalOutput::new());
        Ok(())
    }
}
