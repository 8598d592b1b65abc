//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the plugin to its infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - clap definitions and the command-line config layer
//! - `factory` - Config resolution and plugin creation (dependency injection)
//! - `output` - Output rendering for `check`
//!
//! ## Usage
//!
//! ```ignore
//! use rollbar_deploy::presentation::factory;
//!
//! let (config, _warnings) = factory::resolve_config(None, &cwd, cli_layer)?;
//! let settings = config.into_settings()?;
//! let plugin = factory::create_deploy_plugin(&settings, factory::create_notice_sink(false))?;
//! plugin.write_bundle().await?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, DeployArgs};
pub use factory::{create_deploy_plugin, create_notice_sink, resolve_config};
pub use output::OutputFormat;
