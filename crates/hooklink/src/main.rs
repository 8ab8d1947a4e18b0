//! Hooklink CLI - annotates generated hook docs with documentation and source links.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "hooklink")]
#[command(about = "Annotates generated hook docs with documentation and source links")]
#[command(version)]
pub struct Cli {
    /// Path to hooklink.toml config file
    #[arg(short, long, default_value = "hooklink.toml")]
    config: PathBuf,

    /// Docs directory to annotate (overrides config)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    commands::annotate::run(cli.config, cli.dir).await?;

    Ok(())
}
