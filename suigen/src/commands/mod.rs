mod check;
mod completions;
mod generate;
mod init;
mod list;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;
use suigen_manifest::SuigenToml;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for suigen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "suigen")]
#[command(version)]
#[command(about = "Generate TypeScript bindings for Sui Move packages")]
pub(crate) struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter suigen.toml
    Init(InitCommand),

    /// Generate TypeScript bindings from schema snapshots
    Generate(GenerateCommand),

    /// Validate suigen.toml and load every schema snapshot
    Check(CheckCommand),

    /// List modules, structs and functions of the configured packages
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by commands that read suigen.toml.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to suigen.toml (defaults to ./suigen.toml)
    #[arg(short, long, default_value = "suigen.toml")]
    pub config: PathBuf,

    /// Network whose package ids to use (defaults to generator.network)
    #[arg(short, long)]
    pub network: Option<String>,
}

impl ConfigArgs {
    pub fn open(&self) -> SuigenToml {
        SuigenToml::open(&self.config).unwrap_or_exit()
    }
}
