use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::inspect::{InspectArgs, run_inspect};
use crate::migrate::{MigrateArgs, run_migrate};

#[derive(Debug, Parser)]
#[command(
    name = "nf_migrate",
    about = "Nerd Font v2 → v3 codepoint migration for logo-ls source files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Patch the icon map and formatter sources to the new generation.
    Migrate(MigrateArgs),

    /// Fetch and summarize both reference stylesheets; patch nothing.
    Inspect(InspectArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Migrate(args) => run_migrate(args),
        Commands::Inspect(args) => run_inspect(args),
    }
}
