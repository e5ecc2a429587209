//! cellview CLI - sector coverage scenes on web maps
//!
//! This is the presentation shell around the cellview core: it collects the
//! scene inputs, drives the generators, and writes map-ready output.

mod cli;
mod commands;
mod config_loader;
mod html;
mod interactive;
mod output;
mod output_types;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments and execute the command
    let cli = Cli::parse();
    commands::execute(cli)
}
