//! Check command handler
//!
//! Resolves every config layer and validates the result exactly as `notify`
//! would, then prints it. Nothing is sent.

use std::path::PathBuf;

use anyhow::Result;

use rollbar_deploy::presentation::factory;
use rollbar_deploy::presentation::output::{render_settings, OutputFormat};
use rollbar_deploy::presentation::DeployArgs;

use super::report_config_warnings;

pub fn cmd_check(args: &DeployArgs, config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let format = OutputFormat::from_flag(json);
    let cwd = std::env::current_dir()?;

    let (config, warnings) = factory::resolve_config(config_path, &cwd, args.to_config())?;
    report_config_warnings(&warnings, format);

    let settings = config.into_settings()?;
    let request = settings.options.to_request()?;

    print!("{}", render_settings(&request, &settings, format));
    Ok(())
}
