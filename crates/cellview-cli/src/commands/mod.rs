//! Command implementations

mod grid;
mod init;
mod inspect;
mod render;
mod sector;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match cli.command {
        Commands::Init(args) => init::execute(args, &output),
        Commands::Render(args) => render::execute(args, &output),
        Commands::Sector(args) => sector::execute(args, &output),
        Commands::Grid(args) => grid::execute(args, &output),
        Commands::Inspect(args) => inspect::execute(args, &output),
    }
}
