//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Deploy flags form the highest config layer; anything left unset falls
//!   through to env vars and config files

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, DeploySection, HookSection, HttpSection};
use crate::domain::value_objects::FailurePolicy;

/// rollbar-deploy - notify Rollbar of a deployment
#[derive(Parser, Debug)]
#[command(name = "rollbar-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project config file (default: ./rollbar-deploy.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send the deploy notification to Rollbar
    Notify(DeployArgs),

    /// Resolve and validate settings without sending anything
    Check(DeployArgs),
}

/// Deploy settings accepted on the command line
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployArgs {
    /// Rollbar access token with post_server_item scope
    #[arg(long, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Revision being deployed (usually a commit SHA)
    #[arg(long)]
    pub revision: Option<String>,

    /// Environment name (production, staging, ...)
    #[arg(long)]
    pub environment: Option<String>,

    /// User who ran the deploy
    #[arg(long, value_name = "NAME")]
    pub local_username: Option<String>,

    /// Don't print the success line
    #[arg(short, long)]
    pub silent: bool,

    /// Deploy API URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// What a transport failure means for the exit code: warn or fail
    #[arg(long, value_name = "POLICY")]
    pub on_transport_error: Option<FailurePolicy>,

    /// Overall request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl DeployArgs {
    /// The flags as a config layer. `--silent` only ever turns silence on.
    pub fn to_config(&self) -> Config {
        Config {
            deploy: DeploySection {
                access_token: self.access_token.clone(),
                revision: self.revision.clone(),
                environment: self.environment.clone(),
                local_username: self.local_username.clone(),
                silent: self.silent.then_some(true),
                endpoint: self.endpoint.clone(),
            },
            hook: HookSection {
                on_transport_error: self.on_transport_error,
            },
            http: HttpSection {
                timeout_secs: self.timeout_secs,
            },
        }
    }
}
