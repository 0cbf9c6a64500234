//! ui-forge CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{AliasCommand, CompressCommand, ListCommand, RenderCommand};
use ui_forge::observability::{self, ObservabilityConfig};

#[derive(Parser)]
#[command(name = "ui-forge")]
#[command(version)]
#[command(about = "Render and inspect ui-forge components", long_about = None)]
struct Cli {
    /// Log registration and rendering details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one component to stdout
    Render(RenderCommand),
    /// Compress HTML from a file or stdin
    Compress(CompressCommand),
    /// List registered components
    List(ListCommand),
    /// Show the alias a class would be registered under
    Alias(AliasCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        observability::init_with(&ObservabilityConfig::new("ui-forge-cli").with_verbose(true))?;
    }

    match cli.command {
        Commands::Render(cmd) => cmd.execute()?,
        Commands::Compress(cmd) => cmd.execute()?,
        Commands::List(cmd) => cmd.execute()?,
        Commands::Alias(cmd) => cmd.execute(),
    }

    Ok(())
}
