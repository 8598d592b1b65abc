//! rollbar-deploy CLI - notify Rollbar of a deployment
//!
//! Usage: rollbar-deploy <COMMAND>
//!
//! Commands:
//!   notify  Send the deploy notification to Rollbar
//!   check   Resolve and validate settings without sending anything

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rollbar_deploy::presentation::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Notify(args) => commands::notify::cmd_notify(&args, cli.config, cli.json).await,
        Commands::Check(args) => commands::check::cmd_check(&args, cli.config, cli.json),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level for this crate.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rollbar_deploy={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
